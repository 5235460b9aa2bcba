//! Media uploads
//!
//! Storage is handled entirely by the backend; the client only sends bytes
//! and keeps the returned URLs.

use shared::models::UploadedMedia;

use crate::ClientResult;
use crate::http::{HttpClient, UploadFile};

const UPLOADS: &str = "api/uploads";

#[derive(Debug, Clone)]
pub struct UploadService<C> {
    http: C,
}

impl<C: HttpClient> UploadService<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub async fn upload(&self, file: UploadFile) -> ClientResult<UploadedMedia> {
        self.http.upload(UPLOADS, file).await
    }

    pub async fn upload_path(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> ClientResult<UploadedMedia> {
        let file = UploadFile::from_path(path).await?;
        self.upload(file).await
    }
}
