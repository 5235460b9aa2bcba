//! Promotional videos

use shared::models::{PromotionalVideo, PromotionalVideoCreate};

use urlencoding::encode;

use crate::ClientResult;
use crate::http::HttpClient;

const VIDEOS: &str = "api/promotional-videos";

#[derive(Debug, Clone)]
pub struct PromotionalVideosService<C> {
    http: C,
}

impl<C: HttpClient> PromotionalVideosService<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<PromotionalVideo>> {
        self.http.get(VIDEOS).await
    }

    pub async fn create(&self, payload: &PromotionalVideoCreate) -> ClientResult<PromotionalVideo> {
        self.http.post(VIDEOS, payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("{VIDEOS}/{}", encode(id))).await
    }
}
