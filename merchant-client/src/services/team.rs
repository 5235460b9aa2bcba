//! Team members and invitations

use shared::models::{InviteRequest, TeamInvitation, TeamMember};

use urlencoding::encode;

use crate::ClientResult;
use crate::http::HttpClient;

const MEMBERS: &str = "api/team/members";
const INVITATIONS: &str = "api/team/invitations";

#[derive(Debug, Clone)]
pub struct TeamService<C> {
    http: C,
}

impl<C: HttpClient> TeamService<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub async fn members(&self) -> ClientResult<Vec<TeamMember>> {
        self.http.get(MEMBERS).await
    }

    pub async fn remove_member(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("{MEMBERS}/{}", encode(id))).await
    }

    pub async fn invitations(&self) -> ClientResult<Vec<TeamInvitation>> {
        self.http.get(INVITATIONS).await
    }

    /// POST /api/team/invitations
    pub async fn invite(&self, request: &InviteRequest) -> ClientResult<TeamInvitation> {
        self.http.post(INVITATIONS, request).await
    }

    /// POST /api/team/invitations/:id/resend
    pub async fn resend(&self, id: &str) -> ClientResult<TeamInvitation> {
        self.http
            .post(&format!("{INVITATIONS}/{}/resend", encode(id)), &serde_json::json!({}))
            .await
    }

    pub async fn revoke(&self, id: &str) -> ClientResult<()> {
        self.http
            .delete(&format!("{INVITATIONS}/{}", encode(id)))
            .await
    }
}
