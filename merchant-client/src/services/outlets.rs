//! Outlets (physical store locations)

use shared::models::{Outlet, OutletCreate, OutletUpdate};

use urlencoding::encode;

use crate::ClientResult;
use crate::http::HttpClient;

const OUTLETS: &str = "api/outlets";

#[derive(Debug, Clone)]
pub struct OutletsService<C> {
    http: C,
}

impl<C: HttpClient> OutletsService<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> ClientResult<Vec<Outlet>> {
        self.http.get(OUTLETS).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Outlet> {
        self.http.get(&format!("{OUTLETS}/{}", encode(id))).await
    }

    pub async fn create(&self, payload: &OutletCreate) -> ClientResult<Outlet> {
        self.http.post(OUTLETS, payload).await
    }

    pub async fn update(&self, id: &str, payload: &OutletUpdate) -> ClientResult<Outlet> {
        self.http
            .put(&format!("{OUTLETS}/{}", encode(id)), payload)
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("{OUTLETS}/{}", encode(id))).await
    }
}
