//! Promotional Video Model

use serde::{Deserialize, Serialize};

/// Promotional video shown on the storefront
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionalVideo {
    pub id: String,
    pub title: String,
    pub video_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub duration_secs: Option<u32>,
    pub is_published: bool,
}

/// Create promotional video payload
///
/// `video_url` / `thumbnail_url` come from a prior upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionalVideoCreate {
    pub title: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub is_published: bool,
}
