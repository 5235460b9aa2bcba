//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Product errors (3xxx)
    Product,
    /// Variant errors (4xxx)
    Variant,
    /// Gallery and media errors (5xxx)
    Media,
    /// Promotion errors (6xxx)
    Promotion,
    /// Outlet and payment errors (7xxx)
    Outlet,
    /// Team errors (8xxx)
    Team,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Product,
            4000..5000 => Self::Variant,
            5000..6000 => Self::Media,
            6000..7000 => Self::Promotion,
            7000..8000 => Self::Outlet,
            8000..9000 => Self::Team,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Product => "product",
            Self::Variant => "variant",
            Self::Media => "media",
            Self::Promotion => "promotion",
            Self::Outlet => "outlet",
            Self::Team => "team",
            Self::System => "system",
        }
    }

    /// Whether the user can reasonably retry by pressing the button again
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::System)
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3201), ErrorCategory::Product);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Variant);
        assert_eq!(ErrorCategory::from_code(5101), ErrorCategory::Media);
        assert_eq!(ErrorCategory::from_code(6202), ErrorCategory::Promotion);
        assert_eq!(ErrorCategory::from_code(7102), ErrorCategory::Outlet);
        assert_eq!(ErrorCategory::from_code(8101), ErrorCategory::Team);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::PermissionDenied.category(), ErrorCategory::Permission);
        assert_eq!(ErrorCode::BulkBatchNotFound.category(), ErrorCategory::Product);
        assert_eq!(ErrorCode::FileTooLarge.category(), ErrorCategory::Media);
        assert_eq!(ErrorCode::TimeoutError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::Promotion).unwrap();
        assert_eq!(json, "\"promotion\"");
        assert!(ErrorCategory::System.is_transient());
        assert!(!ErrorCategory::Permission.is_transient());
    }
}
