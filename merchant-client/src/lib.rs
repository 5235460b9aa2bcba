//! Merchant client - typed HTTP client for the merchant backend
//!
//! - [`services`]: one wrapper per backend resource (products, discounts, ...)
//! - [`bulk`]: selection and bulk mutation workflow with undo history
//! - [`reorder`], [`debounce`]: list interaction helpers

pub mod bulk;
pub mod config;
pub mod debounce;
pub mod error;
pub mod http;
pub mod logger;
pub mod reorder;
pub mod services;

pub use config::{Capabilities, ClientConfig, Platform};
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient, UploadFile};
pub use services::Services;

// Re-export shared types for convenience
pub use shared::{
    ApiResponse, BulkAction, BulkActionResult, BulkActionType, BulkTarget, ListQuery,
    PaginatedResponse,
};
