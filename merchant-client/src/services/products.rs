//! Products service: products, variants and gallery

use shared::models::{
    GalleryItem, Product, ProductCreate, ProductUpdate, SortOrderUpdate, Variant,
};
use shared::{BulkActionRequest, BulkActionResult, ListQuery, PaginatedResponse, UndoRequest};

use urlencoding::encode;

use crate::ClientResult;
use crate::http::HttpClient;

const PRODUCTS: &str = "api/products";

/// `api/products/{id}/{suffix}` with the product ID escaped
fn product_path(product_id: &str, suffix: &str) -> String {
    format!("{PRODUCTS}/{}/{suffix}", encode(product_id))
}

/// Typed wrapper over the product endpoints
#[derive(Debug, Clone)]
pub struct ProductsService<C> {
    http: C,
}

impl<C: HttpClient> ProductsService<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    // ========== Products ==========

    /// GET /api/products - paginated search
    pub async fn list(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<Product>> {
        self.http.get_query(PRODUCTS, query).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Product> {
        self.http.get(&format!("{PRODUCTS}/{}", encode(id))).await
    }

    pub async fn create(&self, payload: &ProductCreate) -> ClientResult<Product> {
        self.http.post(PRODUCTS, payload).await
    }

    pub async fn update(&self, id: &str, payload: &ProductUpdate) -> ClientResult<Product> {
        self.http
            .put(&format!("{PRODUCTS}/{}", encode(id)), payload)
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http
            .delete(&format!("{PRODUCTS}/{}", encode(id)))
            .await
    }

    /// POST /api/products/bulk
    pub async fn bulk(&self, request: &BulkActionRequest) -> ClientResult<BulkActionResult> {
        self.http.post(&format!("{PRODUCTS}/bulk"), request).await
    }

    /// POST /api/products/bulk/undo
    pub async fn undo_bulk(&self, request: &UndoRequest) -> ClientResult<()> {
        self.http.post(&format!("{PRODUCTS}/bulk/undo"), request).await
    }

    // ========== Variants ==========

    /// GET /api/products/:id/variants
    pub async fn list_variants(
        &self,
        product_id: &str,
        query: &ListQuery,
    ) -> ClientResult<PaginatedResponse<Variant>> {
        self.http
            .get_query(&product_path(product_id, "variants"), query)
            .await
    }

    /// POST /api/products/:id/variants/bulk
    pub async fn bulk_variants(
        &self,
        product_id: &str,
        request: &BulkActionRequest,
    ) -> ClientResult<BulkActionResult> {
        self.http
            .post(&product_path(product_id, "variants/bulk"), request)
            .await
    }

    /// POST /api/products/:id/variants/bulk/undo
    pub async fn undo_bulk_variants(
        &self,
        product_id: &str,
        request: &UndoRequest,
    ) -> ClientResult<()> {
        self.http
            .post(&product_path(product_id, "variants/bulk/undo"), request)
            .await
    }

    // ========== Gallery ==========

    /// GET /api/products/:id/gallery - ordered by sort_order
    pub async fn list_gallery(&self, product_id: &str) -> ClientResult<Vec<GalleryItem>> {
        self.http.get(&product_path(product_id, "gallery")).await
    }

    /// POST /api/products/:id/gallery/bulk-delete
    pub async fn delete_gallery_items(
        &self,
        product_id: &str,
        request: &BulkActionRequest,
    ) -> ClientResult<BulkActionResult> {
        self.http
            .post(&product_path(product_id, "gallery/bulk-delete"), request)
            .await
    }

    /// PUT /api/products/:id/gallery/sort-order
    pub async fn update_gallery_order(
        &self,
        product_id: &str,
        updates: &[SortOrderUpdate],
    ) -> ClientResult<()> {
        self.http
            .put(&product_path(product_id, "gallery/sort-order"), &updates)
            .await
    }
}
