//! Store discounts and deals

use shared::models::{Discount, DiscountCreate, DiscountUpdate};
use shared::{ListQuery, PaginatedResponse};

use urlencoding::encode;

use crate::ClientResult;
use crate::http::HttpClient;

const DISCOUNTS: &str = "api/discounts";

#[derive(Debug, Clone)]
pub struct DiscountsService<C> {
    http: C,
}

impl<C: HttpClient> DiscountsService<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<Discount>> {
        self.http.get_query(DISCOUNTS, query).await
    }

    pub async fn create(&self, payload: &DiscountCreate) -> ClientResult<Discount> {
        self.http.post(DISCOUNTS, payload).await
    }

    pub async fn update(&self, id: &str, payload: &DiscountUpdate) -> ClientResult<Discount> {
        self.http
            .put(&format!("{DISCOUNTS}/{}", encode(id)), payload)
            .await
    }

    /// Toggle a deal on or off without touching its other fields
    pub async fn set_active(&self, id: &str, is_active: bool) -> ClientResult<Discount> {
        let payload = DiscountUpdate {
            is_active: Some(is_active),
            ..Default::default()
        };
        self.update(id, &payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http
            .delete(&format!("{DISCOUNTS}/{}", encode(id)))
            .await
    }
}
