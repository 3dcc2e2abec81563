use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{seed, CatalogSource, CategoryFilter, ProductFilter};
use crate::core::config::MockStoreConfig;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::{CategoryId, CategoryNode};
use crate::features::categories::tree::{aggregate_products, find_node};
use crate::features::products::models::{Product, ProductDraft};
use crate::shared::types::Page;
use crate::shared::validation::{matches_all_tokens, search_tokens};

/// In-memory catalog standing in for the backend
///
/// The category forest and the flat product table are independent records:
/// products embedded in category nodes are snapshots, and editing a flat
/// product does not rewrite the tree.
pub struct MockStore {
    categories: RwLock<Vec<CategoryNode>>,
    products: RwLock<Vec<Product>>,
    /// Never reused, so a deleted id cannot come back as a different product
    next_product_id: AtomicI64,
    latency: Duration,
}

impl MockStore {
    pub fn new(categories: Vec<CategoryNode>, products: Vec<Product>, latency: Duration) -> Self {
        // Tree snapshots hold ids too; a new record must not shadow one
        let max_product_id = products
            .iter()
            .map(|p| p.id)
            .chain(
                categories
                    .iter()
                    .flat_map(aggregate_products)
                    .map(|p| p.id),
            )
            .max()
            .unwrap_or(0);

        Self {
            categories: RwLock::new(categories),
            products: RwLock::new(products),
            next_product_id: AtomicI64::new(max_product_id + 1),
            latency,
        }
    }

    /// Demo category tree plus generated products
    pub fn seeded(config: &MockStoreConfig) -> Self {
        let categories = seed::demo_categories();
        let mut products = seed::generated_products(config.seed, config.product_count);
        products.extend(categories.iter().flat_map(aggregate_products));

        tracing::debug!(
            "Seeded mock catalog: {} top-level categories, {} products",
            categories.len(),
            products.len()
        );

        Self::new(categories, products, config.latency)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn next_category_id(forest: &[CategoryNode]) -> CategoryId {
        fn max_id(nodes: &[CategoryNode]) -> CategoryId {
            nodes
                .iter()
                .map(|n| n.id.max(max_id(&n.children)))
                .max()
                .unwrap_or(0)
        }
        max_id(forest) + 1
    }

    fn product_not_found(id: i64) -> AppError {
        AppError::NotFound(format!("Product with ID {} not found", id))
    }
}

#[async_trait]
impl CatalogSource for MockStore {
    async fn fetch_category_tree(&self, filter: &CategoryFilter) -> Result<Page<CategoryNode>> {
        self.simulate_latency().await;

        let tokens = search_tokens(filter.search.as_deref().unwrap_or_default());
        let categories = self.categories.read().await;
        let matching: Vec<CategoryNode> = categories
            .iter()
            .filter(|c| matches_all_tokens(&tokens, &[c.name.as_str()]))
            .cloned()
            .collect();

        Ok(filter.page.apply(&matching))
    }

    async fn get_category(&self, id: CategoryId) -> Result<CategoryNode> {
        self.simulate_latency().await;

        let categories = self.categories.read().await;
        find_node(&categories, id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Category with ID {} not found", id)))
    }

    async fn create_category(&self, name: String, product_ids: &[i64]) -> Result<CategoryNode> {
        let products = {
            let records = self.products.read().await;
            product_ids
                .iter()
                .map(|id| {
                    records
                        .iter()
                        .find(|p| p.id == *id)
                        .cloned()
                        .ok_or_else(|| Self::product_not_found(*id))
                })
                .collect::<Result<Vec<_>>>()?
        };

        let mut categories = self.categories.write().await;
        let node = CategoryNode::new(Self::next_category_id(&categories), name)
            .with_products(products);
        categories.push(node.clone());

        tracing::info!(
            "Category created: id={}, name={:?}, products={}",
            node.id,
            node.name,
            node.products.len()
        );

        Ok(node)
    }

    async fn list_products(&self, filter: &ProductFilter) -> Result<Page<Product>> {
        self.simulate_latency().await;

        let tokens = search_tokens(filter.search.as_deref().unwrap_or_default());
        let products = self.products.read().await;
        let matching: Vec<Product> = products
            .iter()
            .filter(|p| filter.categories.is_empty() || filter.categories.contains(&p.category))
            .filter(|p| {
                matches_all_tokens(
                    &tokens,
                    &[p.name.as_str(), p.description.as_str(), p.category.as_str()],
                )
            })
            .cloned()
            .collect();

        Ok(filter.page.apply(&matching))
    }

    async fn get_product(&self, id: i64) -> Result<Product> {
        self.simulate_latency().await;

        let products = self.products.read().await;
        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Self::product_not_found(id))
    }

    async fn create_product(&self, draft: ProductDraft) -> Result<Product> {
        let mut products = self.products.write().await;
        let id = self.next_product_id.fetch_add(1, Ordering::Relaxed);
        let now = Utc::now();

        let product = Product {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            discount_price: draft.discount_price,
            category: draft.category,
            photo_url: draft.photo_url,
            created_at: now,
            updated_at: now,
            warranty_info: draft.warranty_info,
        };
        products.push(product.clone());

        tracing::info!("Product created: id={}, name={:?}", product.id, product.name);

        Ok(product)
    }

    async fn update_product(&self, id: i64, draft: ProductDraft) -> Result<Product> {
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Self::product_not_found(id))?;

        product.name = draft.name;
        product.description = draft.description;
        product.price = draft.price;
        product.discount_price = draft.discount_price;
        product.category = draft.category;
        product.photo_url = draft.photo_url;
        product.warranty_info = draft.warranty_info;
        product.updated_at = Utc::now();

        tracing::info!("Product updated: id={}", id);

        Ok(product.clone())
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Self::product_not_found(id))?;
        products.remove(index);

        tracing::info!("Product deleted: id={}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::products::models::WarrantyEntry;
    use crate::shared::test_helpers::{catalog_fixture, product};
    use crate::shared::types::PageRequest;
    use rust_decimal::Decimal;

    fn store() -> MockStore {
        let products = vec![
            product(1, "Galaxy S10"),
            product(2, "Galaxy Tab A9"),
            Product {
                category: "Books".to_string(),
                ..product(3, "Rust in Action")
            },
        ];
        MockStore::new(catalog_fixture(), products, Duration::ZERO)
    }

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: "A product used in tests".to_string(),
            price: Decimal::new(1999, 2),
            discount_price: None,
            category: "Electronics".to_string(),
            photo_url: "https://example.com/p.png".to_string(),
            warranty_info: vec![WarrantyEntry::new("12 months")],
        }
    }

    fn category_filter(search: Option<&str>) -> CategoryFilter {
        CategoryFilter {
            page: PageRequest::new(None, None, 5),
            search: search.map(str::to_string),
        }
    }

    fn product_filter(categories: &[&str], search: Option<&str>) -> ProductFilter {
        ProductFilter {
            page: PageRequest::new(None, None, 10),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            search: search.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_fetch_category_tree_paginates_roots() {
        let store = store();
        let filter = CategoryFilter {
            page: PageRequest::new(Some(2), Some(1), 5),
            search: None,
        };

        let page = tokio_test::assert_ok!(store.fetch_category_tree(&filter).await);

        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Laptop");
        assert_eq!(page.items[0].children.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_category_tree_searches_root_names() {
        let store = store();

        let page = store
            .fetch_category_tree(&category_filter(Some("lap")))
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, 9);
    }

    #[tokio::test]
    async fn test_get_category_finds_nested_node() {
        let store = store();

        let node = store.get_category(3).await.unwrap();
        assert_eq!(node.name, "Apple");

        let missing = store.get_category(404).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_category_resolves_products() {
        let store = store();

        let node = store
            .create_category("Featured".to_string(), &[2, 1])
            .await
            .unwrap();

        assert_eq!(node.id, 12);
        assert_eq!(
            node.products.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 1]
        );
        assert_eq!(store.get_category(12).await.unwrap(), node);
    }

    #[tokio::test]
    async fn test_create_category_rejects_unknown_product() {
        let store = store();

        let result = store.create_category("Broken".to_string(), &[1, 99]).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(
            store
                .fetch_category_tree(&category_filter(None))
                .await
                .unwrap()
                .total,
            2
        );
    }

    #[tokio::test]
    async fn test_list_products_filters_by_category_and_search() {
        let store = store();

        let books = store
            .list_products(&product_filter(&["Books"], None))
            .await
            .unwrap();
        assert_eq!(books.total, 1);
        assert_eq!(books.items[0].id, 3);

        let galaxy = store
            .list_products(&product_filter(&[], Some("galaxy tab")))
            .await
            .unwrap();
        assert_eq!(galaxy.items.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
    }

    #[tokio::test]
    async fn test_product_crud_round() {
        let store = store();

        let created = store.create_product(draft("Pixel 9")).await.unwrap();
        assert_eq!(created.id, 503);
        assert_eq!(store.get_product(503).await.unwrap(), created);

        let updated = store.update_product(503, draft("Pixel 9 Pro")).await.unwrap();
        assert_eq!(updated.name, "Pixel 9 Pro");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        store.delete_product(503).await.unwrap();
        assert!(matches!(
            store.get_product(503).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_product(503).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_deleted_product_id_is_not_reused() {
        let store = MockStore::new(
            vec![],
            vec![product(1, "Galaxy S10"), product(2, "Galaxy Tab A9")],
            Duration::ZERO,
        );

        store.delete_product(2).await.unwrap();
        let created = store.create_product(draft("Pixel 9")).await.unwrap();

        assert_eq!(created.id, 3);
        assert!(matches!(
            store.get_product(2).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_new_product_ids_skip_tree_snapshots() {
        let store = MockStore::new(catalog_fixture(), vec![], Duration::ZERO);

        let created = store.create_product(draft("Pixel 9")).await.unwrap();

        assert_eq!(created.id, 503);
    }

    #[tokio::test]
    async fn test_updating_product_leaves_tree_snapshot() {
        let store = store();

        store.update_product(1, draft("Renamed")).await.unwrap();

        let samsung = store.get_category(2).await.unwrap();
        assert_eq!(samsung.products[0].name, "Galaxy S10");
    }

    #[test]
    fn test_seeded_store_includes_tree_products() {
        let config = MockStoreConfig {
            latency: Duration::ZERO,
            seed: 1,
            product_count: 3,
        };
        let store = MockStore::seeded(&config);

        let products = tokio_test::block_on(store.list_products(&product_filter(&[], None)))
            .unwrap();

        assert_eq!(products.total, 3 + 9);
    }
}
