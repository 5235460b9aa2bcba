//! HTTP status code mapping for error codes
//!
//! The client uses this in reverse: a response carrying one of these codes
//! is reported with the status the backend is expected to send.

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::ProductNotFound
            | Self::CategoryNotFound
            | Self::BulkBatchNotFound
            | Self::VariantNotFound
            | Self::GalleryItemNotFound
            | Self::VideoNotFound
            | Self::DiscountNotFound
            | Self::OfferNotFound
            | Self::SubmissionNotFound
            | Self::OutletNotFound
            | Self::QrPaymentNotFound
            | Self::MemberNotFound
            | Self::InvitationNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::VariantCombinationExists
            | Self::SubmissionAlreadyReviewed
            | Self::AlreadyMember
            | Self::BulkUndoExpired => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated | Self::TokenExpired | Self::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }

            // 403 Forbidden
            Self::PermissionDenied | Self::OwnerRequired => StatusCode::FORBIDDEN,

            // 410 Gone
            Self::QrPaymentExpired => StatusCode::GONE,

            // 413 Payload Too Large
            Self::FileTooLarge => StatusCode::PAYLOAD_TOO_LARGE,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::NetworkError | Self::TimeoutError | Self::SystemBusy => {
                StatusCode::SERVICE_UNAVAILABLE
            }

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError | Self::DatabaseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::ProductNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::BulkBatchNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_auth_and_permission_status() {
        assert_eq!(ErrorCode::TokenExpired.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::OwnerRequired.http_status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_bad_request_default() {
        assert_eq!(ErrorCode::ValidationFailed.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::BulkActionUnsupported.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::DiscountInvalidPeriod.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_transient_status() {
        assert_eq!(ErrorCode::TimeoutError.http_status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(ErrorCode::BulkUndoExpired.http_status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::QrPaymentExpired.http_status(), StatusCode::GONE);
    }
}
