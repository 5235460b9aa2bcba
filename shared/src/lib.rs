//! Shared types for the merchant platform
//!
//! Wire types exchanged with the merchant backend: error codes, the response
//! envelope, pagination, list queries, entity view models and bulk action
//! payloads.

pub mod bulk;
pub mod error;
pub mod models;
pub mod query;
pub mod response;

// Re-exports
pub use bulk::{
    BulkAction, BulkActionRequest, BulkActionResult, BulkActionType, BulkFailure, BulkTarget,
    PriceDirection, UndoRequest,
};
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use query::ListQuery;
pub use response::{PaginatedResponse, Pagination};
pub use serde::{Deserialize, Serialize};
