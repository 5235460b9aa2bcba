//! Client error types

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with an error envelope
    #[error("{message}")]
    Api {
        code: ErrorCode,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local file could not be read (uploads)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Message the server attached to the failure, if any
    ///
    /// Transport and local failures have no server message; callers show a
    /// fallback string instead.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. }
            | ClientError::Forbidden(message)
            | ClientError::NotFound(message)
            | ClientError::Validation(message)
            | ClientError::Internal(message) => {
                let trimmed = message.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }

    /// Backend error code, when the backend reported one
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Api { code, .. } => Some(*code),
            ClientError::Unauthorized => Some(ErrorCode::NotAuthenticated),
            ClientError::Forbidden(_) => Some(ErrorCode::PermissionDenied),
            _ => None,
        }
    }
}

impl From<AppError> for ClientError {
    fn from(err: AppError) -> Self {
        ClientError::Api {
            code: err.code,
            message: err.message,
            details: err
                .details
                .map(|d| serde_json::Value::Object(d.into_iter().collect())),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message() {
        let err = ClientError::Api {
            code: ErrorCode::BulkUndoExpired,
            message: "Too late".into(),
            details: None,
        };
        assert_eq!(err.server_message(), Some("Too late"));
        assert_eq!(err.code(), Some(ErrorCode::BulkUndoExpired));

        assert_eq!(ClientError::Internal("   ".into()).server_message(), None);
        assert_eq!(ClientError::Unauthorized.server_message(), None);
        assert_eq!(
            ClientError::InvalidResponse("x".into()).server_message(),
            None
        );
    }

    #[test]
    fn test_from_app_error() {
        let err: ClientError = AppError::validation("bad value")
            .with_detail("field", "value")
            .into();
        match err {
            ClientError::Api {
                code,
                message,
                details,
            } => {
                assert_eq!(code, ErrorCode::ValidationFailed);
                assert_eq!(message, "bad value");
                assert_eq!(details.unwrap()["field"], "value");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
