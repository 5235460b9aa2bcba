//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// Carries what the backend reports on failure:
/// - a standardized [`ErrorCode`]
/// - a human-readable message
/// - optional structured details (field-level errors, ids, ...)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create a permission denied error
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PermissionDenied, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }
}

/// Unified API response structure
///
/// Every backend endpoint answers with this envelope:
/// - `code`: error code (0 for success)
/// - `message`: human-readable message
/// - `data`: response payload (on success)
/// - `details`: additional error details (on failure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code (0 for success, non-zero for errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Additional error details (present on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }

    /// Whether the envelope reports success (missing code counts as success)
    pub fn is_success(&self) -> bool {
        self.code.is_none_or(|c| c == 0)
    }

    /// Convert a failed envelope into the error it describes
    ///
    /// Returns `None` for successful envelopes.
    pub fn to_error(&self) -> Option<AppError> {
        if self.is_success() {
            return None;
        }
        let code = self
            .code
            .and_then(|c| ErrorCode::try_from(c).ok())
            .unwrap_or(ErrorCode::Unknown);
        Some(AppError {
            code,
            message: self.message.clone(),
            details: self.details.clone(),
        })
    }
}

impl ApiResponse<()> {
    /// Create a success response without data
    pub fn ok() -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: None,
            details: None,
        }
    }

    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message,
            data: None,
            details: err.details,
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Percentage out of range")
            .with_detail("field", "value")
            .with_detail("max", 100);

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "value");
        assert_eq!(details.get("max").unwrap(), 100);
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(
            AppError::permission_denied("owner only").http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(AppError::not_found("Product").http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::OutletNotFound, "Outlet 7 not found");
        assert_eq!(format!("{}", err), "Outlet 7 not found");
    }

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(42);
        assert_eq!(response.code, Some(0));
        assert_eq!(response.data, Some(42));
        assert!(response.is_success());
        assert!(response.to_error().is_none());
    }

    #[test]
    fn test_api_response_error_roundtrip() {
        let err = AppError::with_message(ErrorCode::BulkUndoExpired, "Too late to undo")
            .with_detail("batch_id", "b-1");
        let response = ApiResponse::<()>::error(&err);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("\"data\""));

        let parsed: ApiResponse<()> = serde_json::from_str(&json).unwrap();
        let back = parsed.to_error().unwrap();
        assert_eq!(back.code, ErrorCode::BulkUndoExpired);
        assert_eq!(back.message, "Too late to undo");
    }

    #[test]
    fn test_api_response_missing_fields() {
        let parsed: ApiResponse<u32> = serde_json::from_str(r#"{"data": 5}"#).unwrap();
        assert!(parsed.is_success());
        assert_eq!(parsed.data, Some(5));

        let unknown: ApiResponse<u32> =
            serde_json::from_str(r#"{"code": 4242, "message": "odd"}"#).unwrap();
        assert_eq!(unknown.to_error().unwrap().code, ErrorCode::Unknown);
    }
}
