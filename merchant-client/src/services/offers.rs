//! Product offers

use shared::models::{Offer, OfferCreate, OfferUpdate};
use shared::{ListQuery, PaginatedResponse};

use urlencoding::encode;

use crate::ClientResult;
use crate::http::HttpClient;

const OFFERS: &str = "api/offers";

#[derive(Debug, Clone)]
pub struct OffersService<C> {
    http: C,
}

impl<C: HttpClient> OffersService<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<Offer>> {
        self.http.get_query(OFFERS, query).await
    }

    pub async fn create(&self, payload: &OfferCreate) -> ClientResult<Offer> {
        self.http.post(OFFERS, payload).await
    }

    pub async fn update(&self, id: &str, payload: &OfferUpdate) -> ClientResult<Offer> {
        self.http
            .put(&format!("{OFFERS}/{}", encode(id)), payload)
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("{OFFERS}/{}", encode(id))).await
    }
}
