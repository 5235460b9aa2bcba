//! Backends the bulk workflow drives
//!
//! One [`BulkBackend`] per entity collection. The session only needs to
//! list, mutate, undo and (optionally) reorder; each adapter maps those onto
//! the matching endpoints of [`ProductsService`].

use async_trait::async_trait;
use shared::models::{GalleryItem, Product, SortOrderUpdate, Variant};
use shared::{
    BulkActionRequest, BulkActionResult, BulkTarget, ListQuery, PaginatedResponse, UndoRequest,
};

use crate::http::HttpClient;
use crate::services::ProductsService;
use crate::{ClientError, ClientResult};

/// An entity that can be selected by ID
pub trait Listed {
    fn id(&self) -> &str;

    /// Stored sort position, for lists the backend keeps in a manual order
    fn sort_order(&self) -> Option<i32> {
        None
    }
}

impl Listed for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Listed for Variant {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Listed for GalleryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn sort_order(&self) -> Option<i32> {
        Some(self.sort_order)
    }
}

/// Collection endpoints used by a bulk session
#[async_trait]
pub trait BulkBackend: Send + Sync {
    type Item: Listed + Send + Sync;

    fn target(&self) -> BulkTarget;

    async fn load(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<Self::Item>>;

    async fn apply(&self, request: &BulkActionRequest) -> ClientResult<BulkActionResult>;

    async fn undo(&self, request: &UndoRequest) -> ClientResult<()>;

    async fn save_order(&self, _updates: &[SortOrderUpdate]) -> ClientResult<()> {
        Err(ClientError::Validation(format!(
            "{} cannot be reordered",
            self.target().noun()
        )))
    }
}

/// Product list
#[derive(Debug, Clone)]
pub struct ProductsTarget<C> {
    service: ProductsService<C>,
}

impl<C: HttpClient> ProductsTarget<C> {
    pub fn new(service: ProductsService<C>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<C: HttpClient> BulkBackend for ProductsTarget<C> {
    type Item = Product;

    fn target(&self) -> BulkTarget {
        BulkTarget::Products
    }

    async fn load(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<Product>> {
        self.service.list(query).await
    }

    async fn apply(&self, request: &BulkActionRequest) -> ClientResult<BulkActionResult> {
        self.service.bulk(request).await
    }

    async fn undo(&self, request: &UndoRequest) -> ClientResult<()> {
        self.service.undo_bulk(request).await
    }
}

/// Variants of one product
#[derive(Debug, Clone)]
pub struct VariantsTarget<C> {
    service: ProductsService<C>,
    product_id: String,
}

impl<C: HttpClient> VariantsTarget<C> {
    pub fn new(service: ProductsService<C>, product_id: impl Into<String>) -> Self {
        Self {
            service,
            product_id: product_id.into(),
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }
}

#[async_trait]
impl<C: HttpClient> BulkBackend for VariantsTarget<C> {
    type Item = Variant;

    fn target(&self) -> BulkTarget {
        BulkTarget::Variants
    }

    async fn load(&self, query: &ListQuery) -> ClientResult<PaginatedResponse<Variant>> {
        self.service.list_variants(&self.product_id, query).await
    }

    async fn apply(&self, request: &BulkActionRequest) -> ClientResult<BulkActionResult> {
        self.service.bulk_variants(&self.product_id, request).await
    }

    async fn undo(&self, request: &UndoRequest) -> ClientResult<()> {
        self.service
            .undo_bulk_variants(&self.product_id, request)
            .await
    }
}

/// Gallery of one product; only supports deletion and reordering
#[derive(Debug, Clone)]
pub struct GalleryTarget<C> {
    service: ProductsService<C>,
    product_id: String,
}

impl<C: HttpClient> GalleryTarget<C> {
    pub fn new(service: ProductsService<C>, product_id: impl Into<String>) -> Self {
        Self {
            service,
            product_id: product_id.into(),
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }
}

#[async_trait]
impl<C: HttpClient> BulkBackend for GalleryTarget<C> {
    type Item = GalleryItem;

    fn target(&self) -> BulkTarget {
        BulkTarget::Gallery
    }

    /// The gallery endpoint is unpaginated; it comes back as a single page
    async fn load(&self, _query: &ListQuery) -> ClientResult<PaginatedResponse<GalleryItem>> {
        let mut items = self.service.list_gallery(&self.product_id).await?;
        items.sort_by_key(|item| item.sort_order);
        let total = items.len();
        Ok(PaginatedResponse::new(items, 1, total as u32, total as u64))
    }

    async fn apply(&self, request: &BulkActionRequest) -> ClientResult<BulkActionResult> {
        self.service
            .delete_gallery_items(&self.product_id, request)
            .await
    }

    async fn undo(&self, _request: &UndoRequest) -> ClientResult<()> {
        Err(ClientError::Validation(
            "Gallery deletions cannot be undone".into(),
        ))
    }

    async fn save_order(&self, updates: &[SortOrderUpdate]) -> ClientResult<()> {
        self.service
            .update_gallery_order(&self.product_id, updates)
            .await
    }
}
