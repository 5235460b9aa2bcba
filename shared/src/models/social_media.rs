//! Social Media Cashback Model
//!
//! Customers post about the store and submit the link; the merchant reviews
//! the post and grants or refuses cashback.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Review state of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Customer social-media post submitted for cashback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMediaSubmission {
    pub id: String,
    pub customer_name: String,
    pub platform: String,
    pub post_url: String,
    pub status: ReviewStatus,
    #[serde(default)]
    pub cashback_amount: Option<Decimal>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Merchant decision on a submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum ReviewDecision {
    Approve { cashback_amount: Decimal },
    Reject { reason: String },
}
