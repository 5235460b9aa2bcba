//! HTTP transport for the merchant backend
//!
//! Every endpoint answers with the [`ApiResponse`] envelope. The transport
//! unwraps it: success yields `data`, failure becomes a [`ClientError`].

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ApiResponse;

use crate::{ClientConfig, ClientError, ClientResult};

/// A file to send to an upload endpoint
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// MIME type; guessed from the file name when `None`
    pub mime: Option<String>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime: None,
        }
    }

    /// Read a file from disk
    pub async fn from_path(path: impl AsRef<std::path::Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin")
            .to_string();
        Ok(Self::new(file_name, bytes))
    }

    pub fn mime_type(&self) -> String {
        self.mime.clone().unwrap_or_else(|| {
            mime_guess::from_path(&self.file_name)
                .first_or_octet_stream()
                .essence_str()
                .to_string()
        })
    }
}

/// HTTP client trait
///
/// Services are generic over this so tests can swap the transport.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn get_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn upload<T: DeserializeOwned>(&self, path: &str, file: UploadFile) -> ClientResult<T>;
    fn token(&self) -> Option<&str>;
}

/// Network HTTP client backed by reqwest
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::from_config(&ClientConfig::new(base_url))
    }

    /// Create a client from configuration (base URL, timeout, token)
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut req = self.client.request(method, url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        req: RequestBuilder,
    ) -> ClientResult<T> {
        tracing::debug!(%method, path, "Sending request");
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(%method, path, status = status.as_u16(), "Response received");
        decode_response(status, &text)
    }
}

/// Decode a response body into its payload
///
/// A missing `data` field is accepted for payload types that deserialize from
/// `null` (`()`, `Option<_>`).
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    text: &str,
) -> ClientResult<T> {
    if !status.is_success() {
        if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(text)
            && let Some(err) = envelope.to_error()
        {
            return Err(err.into());
        }
        return match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text.to_string())),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(text.to_string())),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(ClientError::Validation(text.to_string()))
            }
            _ => Err(ClientError::Internal(text.to_string())),
        };
    }

    let envelope: ApiResponse<T> = serde_json::from_str(text)?;
    if let Some(err) = envelope.to_error() {
        return Err(err.into());
    }
    match envelope.data {
        Some(data) => Ok(data),
        None => serde_json::from_value(serde_json::Value::Null)
            .map_err(|_| ClientError::InvalidResponse("Missing response data".into())),
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::GET, path);
        self.send(Method::GET, path, req).await
    }

    async fn get_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let req = self.request(Method::GET, path).query(query);
        self.send(Method::GET, path, req).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::POST, path).json(body);
        self.send(Method::POST, path, req).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::PUT, path).json(body);
        self.send(Method::PUT, path, req).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::DELETE, path);
        self.send(Method::DELETE, path, req).await
    }

    async fn upload<T: DeserializeOwned>(&self, path: &str, file: UploadFile) -> ClientResult<T> {
        let mime = file.mime_type();
        tracing::info!(file = %file.file_name, size = file.bytes.len(), %mime, "Uploading file");
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&mime)?;
        let form = reqwest::multipart::Form::new().part("file", part);
        let req = self.request(Method::POST, path).multipart(form);
        self.send(Method::POST, path, req).await
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_decode_success_payload() {
        let value: Vec<u32> =
            decode_response(StatusCode::OK, r#"{"code":0,"message":"OK","data":[1,2]}"#).unwrap();
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn test_decode_unit_without_data() {
        let () = decode_response(StatusCode::OK, r#"{"code":0,"message":"OK"}"#).unwrap();
        let err = decode_response::<Vec<u32>>(StatusCode::OK, r#"{"code":0,"message":"OK"}"#)
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn test_decode_error_envelope() {
        let body = r#"{"code":3202,"message":"Batch b-9 not found"}"#;
        let err = decode_response::<()>(StatusCode::NOT_FOUND, body).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::BulkBatchNotFound));
        assert_eq!(err.server_message(), Some("Batch b-9 not found"));

        // error code inside a 200 response is still an error
        let err = decode_response::<()>(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, ClientError::Api { .. }));
    }

    #[test]
    fn test_decode_plain_status_errors() {
        let err = decode_response::<()>(StatusCode::UNAUTHORIZED, "nope").unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized));

        let err = decode_response::<()>(StatusCode::BAD_GATEWAY, "upstream down").unwrap_err();
        assert_eq!(err.server_message(), Some("upstream down"));
    }

    #[test]
    fn test_upload_mime_guess() {
        assert_eq!(UploadFile::new("promo.mp4", vec![]).mime_type(), "video/mp4");
        assert_eq!(UploadFile::new("a.png", vec![]).mime_type(), "image/png");
        assert_eq!(
            UploadFile::new("blob", vec![]).mime_type(),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_base_url_trimmed() {
        let client = NetworkHttpClient::new("http://localhost:9000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert!(client.token().is_none());
        assert_eq!(client.with_token("abc").token(), Some("abc"));
    }
}
