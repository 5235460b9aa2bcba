//! Uploaded media

use serde::{Deserialize, Serialize};

/// Result of a file upload: where the file lives now
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedMedia {
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}
