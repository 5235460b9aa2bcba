//! Social-media cashback review

use shared::models::{ReviewDecision, ReviewStatus, SocialMediaSubmission};

use urlencoding::encode;

use crate::ClientResult;
use crate::http::HttpClient;

const SUBMISSIONS: &str = "api/social-media/submissions";

#[derive(Debug, Clone)]
pub struct SocialMediaService<C> {
    http: C,
}

impl<C: HttpClient> SocialMediaService<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// GET /api/social-media/submissions?status=...
    pub async fn submissions(
        &self,
        status: ReviewStatus,
    ) -> ClientResult<Vec<SocialMediaSubmission>> {
        #[derive(serde::Serialize)]
        struct Filter {
            status: ReviewStatus,
        }
        self.http.get_query(SUBMISSIONS, &Filter { status }).await
    }

    /// POST /api/social-media/submissions/:id/review
    pub async fn review(
        &self,
        id: &str,
        decision: &ReviewDecision,
    ) -> ClientResult<SocialMediaSubmission> {
        self.http
            .post(&format!("{SUBMISSIONS}/{}/review", encode(id)), decision)
            .await
    }
}
