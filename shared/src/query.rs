//! List query parameters
//!
//! Sent as URL query string to every list/search endpoint.

use serde::{Deserialize, Serialize};

use crate::models::EntityStatus;

/// Default page size for list endpoints
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Filters and paging for a list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Page number (1-based)
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntityStatus>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: None,
            category: None,
            status: None,
        }
    }
}

impl ListQuery {
    /// Add paging
    pub fn paginate(mut self, page: u32, per_page: u32) -> Self {
        self.page = page.max(1);
        self.per_page = per_page;
        self
    }

    /// Set the search text; blank text clears the filter and resets paging
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.page = 1;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: EntityStatus) -> Self {
        self.status = Some(status);
        self
    }
}
