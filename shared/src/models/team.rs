//! Team Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a team member inside the merchant account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    Owner,
    Manager,
    #[default]
    Staff,
}

/// Invitation lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Revoked,
    Expired,
}

/// Team member entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: TeamRole,
}

/// Pending or past invitation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamInvitation {
    pub id: String,
    pub email: String,
    pub role: TeamRole,
    pub status: InvitationStatus,
    #[serde(default)]
    pub invited_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Invite payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteRequest {
    pub email: String,
    pub role: TeamRole,
}
