//! Catalog data source.
//!
//! The admin screens read categories and products through [`CatalogSource`].
//! [`MockStore`] is the in-memory implementation used in place of a real
//! backend: seeded records, pagination, search and an artificial read delay.

mod mock_store;
mod seed;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::{CategoryId, CategoryNode};
use crate::features::products::models::{Product, ProductDraft};
use crate::shared::types::{Page, PageRequest};

pub use mock_store::MockStore;

/// Filter for the top-level category listing; passed through to the store as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    pub page: PageRequest,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub page: PageRequest,
    /// Category labels; empty means all
    pub categories: Vec<String>,
    pub search: Option<String>,
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Page of top-level category trees
    async fn fetch_category_tree(&self, filter: &CategoryFilter) -> Result<Page<CategoryNode>>;

    /// Any node of the hierarchy, with its subtree
    async fn get_category(&self, id: CategoryId) -> Result<CategoryNode>;

    /// Append a new top-level category holding the given products
    async fn create_category(&self, name: String, product_ids: &[i64]) -> Result<CategoryNode>;

    async fn list_products(&self, filter: &ProductFilter) -> Result<Page<Product>>;

    async fn get_product(&self, id: i64) -> Result<Product>;

    async fn create_product(&self, draft: ProductDraft) -> Result<Product>;

    async fn update_product(&self, id: i64, draft: ProductDraft) -> Result<Product>;

    async fn delete_product(&self, id: i64) -> Result<()>;
}
