//! Unified error codes for the merchant platform
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Product errors
//! - 4xxx: Variant errors
//! - 5xxx: Gallery and media errors
//! - 6xxx: Promotion errors (discounts, offers, cashback)
//! - 7xxx: Outlet and payment errors
//! - 8xxx: Team errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the backend and every
/// client agree on the same numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Merchant owner role required
    OwnerRequired = 2003,

    // ==================== 3xxx: Product ====================
    /// Product not found
    ProductNotFound = 3001,
    /// Product price is invalid
    ProductInvalidPrice = 3002,
    /// Category not found
    CategoryNotFound = 3101,
    /// Bulk action is not supported for this target
    BulkActionUnsupported = 3201,
    /// Bulk batch not found (undo of unknown batch)
    BulkBatchNotFound = 3202,
    /// Bulk batch can no longer be undone
    BulkUndoExpired = 3203,

    // ==================== 4xxx: Variant ====================
    /// Variant not found
    VariantNotFound = 4001,
    /// Variant option combination already exists
    VariantCombinationExists = 4002,

    // ==================== 5xxx: Gallery / Media ====================
    /// Gallery item not found
    GalleryItemNotFound = 5001,
    /// Uploaded file is too large
    FileTooLarge = 5101,
    /// Uploaded file format is not supported
    UnsupportedFileFormat = 5102,
    /// Upload request carried no file
    NoFileProvided = 5103,
    /// Promotional video not found
    VideoNotFound = 5201,

    // ==================== 6xxx: Promotion ====================
    /// Discount not found
    DiscountNotFound = 6001,
    /// Discount window is invalid (ends before it starts)
    DiscountInvalidPeriod = 6002,
    /// Offer not found
    OfferNotFound = 6101,
    /// Social media submission not found
    SubmissionNotFound = 6201,
    /// Social media submission was already reviewed
    SubmissionAlreadyReviewed = 6202,

    // ==================== 7xxx: Outlet / Payment ====================
    /// Outlet not found
    OutletNotFound = 7001,
    /// QR payment not found
    QrPaymentNotFound = 7101,
    /// QR payment has expired
    QrPaymentExpired = 7102,

    // ==================== 8xxx: Team ====================
    /// Team member not found
    MemberNotFound = 8001,
    /// Invitation not found
    InvitationNotFound = 8101,
    /// Invitee is already a member
    AlreadyMember = 8102,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Timeout error
    TimeoutError = 9004,
    /// Service temporarily busy
    SystemBusy = 9404,
}

impl ErrorCode {
    /// Get the numeric code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Get the default English message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            Self::NotAuthenticated => "Not authenticated",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",

            Self::PermissionDenied => "Permission denied",
            Self::OwnerRequired => "Merchant owner role required",

            Self::ProductNotFound => "Product not found",
            Self::ProductInvalidPrice => "Invalid product price",
            Self::CategoryNotFound => "Category not found",
            Self::BulkActionUnsupported => "Bulk action not supported",
            Self::BulkBatchNotFound => "Bulk batch not found",
            Self::BulkUndoExpired => "Bulk action can no longer be undone",

            Self::VariantNotFound => "Variant not found",
            Self::VariantCombinationExists => "Variant combination already exists",

            Self::GalleryItemNotFound => "Gallery item not found",
            Self::FileTooLarge => "File too large",
            Self::UnsupportedFileFormat => "Unsupported file format",
            Self::NoFileProvided => "No file provided",
            Self::VideoNotFound => "Promotional video not found",

            Self::DiscountNotFound => "Discount not found",
            Self::DiscountInvalidPeriod => "Discount period is invalid",
            Self::OfferNotFound => "Offer not found",
            Self::SubmissionNotFound => "Submission not found",
            Self::SubmissionAlreadyReviewed => "Submission already reviewed",

            Self::OutletNotFound => "Outlet not found",
            Self::QrPaymentNotFound => "QR payment not found",
            Self::QrPaymentExpired => "QR payment expired",

            Self::MemberNotFound => "Team member not found",
            Self::InvitationNotFound => "Invitation not found",
            Self::AlreadyMember => "Already a team member",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::NetworkError => "Network error",
            Self::TimeoutError => "Request timed out",
            Self::SystemBusy => "System busy",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error returned when converting an unknown u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            1001 => Ok(ErrorCode::NotAuthenticated),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            2001 => Ok(ErrorCode::PermissionDenied),
            2003 => Ok(ErrorCode::OwnerRequired),

            3001 => Ok(ErrorCode::ProductNotFound),
            3002 => Ok(ErrorCode::ProductInvalidPrice),
            3101 => Ok(ErrorCode::CategoryNotFound),
            3201 => Ok(ErrorCode::BulkActionUnsupported),
            3202 => Ok(ErrorCode::BulkBatchNotFound),
            3203 => Ok(ErrorCode::BulkUndoExpired),

            4001 => Ok(ErrorCode::VariantNotFound),
            4002 => Ok(ErrorCode::VariantCombinationExists),

            5001 => Ok(ErrorCode::GalleryItemNotFound),
            5101 => Ok(ErrorCode::FileTooLarge),
            5102 => Ok(ErrorCode::UnsupportedFileFormat),
            5103 => Ok(ErrorCode::NoFileProvided),
            5201 => Ok(ErrorCode::VideoNotFound),

            6001 => Ok(ErrorCode::DiscountNotFound),
            6002 => Ok(ErrorCode::DiscountInvalidPeriod),
            6101 => Ok(ErrorCode::OfferNotFound),
            6201 => Ok(ErrorCode::SubmissionNotFound),
            6202 => Ok(ErrorCode::SubmissionAlreadyReviewed),

            7001 => Ok(ErrorCode::OutletNotFound),
            7101 => Ok(ErrorCode::QrPaymentNotFound),
            7102 => Ok(ErrorCode::QrPaymentExpired),

            8001 => Ok(ErrorCode::MemberNotFound),
            8101 => Ok(ErrorCode::InvitationNotFound),
            8102 => Ok(ErrorCode::AlreadyMember),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9404 => Ok(ErrorCode::SystemBusy),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::ProductNotFound.code(), 3001);
        assert_eq!(ErrorCode::BulkUndoExpired.code(), 3203);
        assert_eq!(ErrorCode::VariantNotFound.code(), 4001);
        assert_eq!(ErrorCode::GalleryItemNotFound.code(), 5001);
        assert_eq!(ErrorCode::DiscountNotFound.code(), 6001);
        assert_eq!(ErrorCode::OutletNotFound.code(), 7001);
        assert_eq!(ErrorCode::InvitationNotFound.code(), 8101);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::NotFound.is_success());
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(6), Err(InvalidErrorCode(6)));
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::BulkBatchNotFound).unwrap();
        assert_eq!(json, "3202");

        let code: ErrorCode = serde_json::from_str("7102").unwrap();
        assert_eq!(code, ErrorCode::QrPaymentExpired);

        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_every_code_roundtrips_through_u16() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::RequiredField,
            ErrorCode::TokenInvalid,
            ErrorCode::OwnerRequired,
            ErrorCode::CategoryNotFound,
            ErrorCode::VariantCombinationExists,
            ErrorCode::NoFileProvided,
            ErrorCode::SubmissionAlreadyReviewed,
            ErrorCode::QrPaymentNotFound,
            ErrorCode::AlreadyMember,
            ErrorCode::SystemBusy,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(u16::from(code)), Ok(code));
        }
    }
}
