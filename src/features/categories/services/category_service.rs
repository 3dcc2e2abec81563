use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::dtos::{
    CategoryResponseDto, CategoryTreeDto, CreateCategoryDto, ListCategoriesQuery,
};
use crate::features::categories::models::{CategoryId, CategoryNode};
use crate::features::categories::tree::{aggregate_products, check_forest};
use crate::features::products::dtos::ProductResponseDto;
use crate::modules::catalog_store::{CatalogSource, CategoryFilter};
use crate::shared::constants::DEFAULT_CATEGORY_PAGE_SIZE;
use crate::shared::types::{Page, PageRequest};

/// Service for category operations
pub struct CategoryService {
    source: Arc<dyn CatalogSource>,
    max_tree_depth: usize,
}

impl CategoryService {
    pub fn new(source: Arc<dyn CatalogSource>, max_tree_depth: usize) -> Self {
        Self {
            source,
            max_tree_depth,
        }
    }

    async fn fetch_forest(&self, query: &ListCategoriesQuery) -> Result<Page<CategoryNode>> {
        let page = self.source.fetch_category_tree(&Self::filter(query)).await?;
        check_forest(&page.items, self.max_tree_depth)?;
        Ok(page)
    }

    async fn fetch_node(&self, id: CategoryId) -> Result<CategoryNode> {
        let node = self.source.get_category(id).await?;
        check_forest(std::slice::from_ref(&node), self.max_tree_depth)?;
        Ok(node)
    }

    fn filter(query: &ListCategoriesQuery) -> CategoryFilter {
        CategoryFilter {
            page: PageRequest::new(query.page, query.limit, DEFAULT_CATEGORY_PAGE_SIZE),
            search: query.search.clone().filter(|s| !s.trim().is_empty()),
        }
    }

    /// List top-level categories (flat summaries)
    pub async fn list(&self, query: &ListCategoriesQuery) -> Result<Page<CategoryResponseDto>> {
        let page = self.fetch_forest(query).await?;
        Ok(page.map(|node| CategoryResponseDto::from(&node)))
    }

    /// List top-level categories as tree structure
    pub async fn list_tree(&self, query: &ListCategoriesQuery) -> Result<Page<CategoryTreeDto>> {
        let page = self.fetch_forest(query).await?;
        Ok(page.map(Into::into))
    }

    /// Get any category by id, with its subtree
    pub async fn get_by_id(&self, id: CategoryId) -> Result<CategoryTreeDto> {
        Ok(self.fetch_node(id).await?.into())
    }

    /// All products in the category and its subcategories, pre-order
    pub async fn products(&self, id: CategoryId) -> Result<Vec<ProductResponseDto>> {
        let node = self.fetch_node(id).await?;
        Ok(aggregate_products(&node)
            .into_iter()
            .map(Into::into)
            .collect())
    }

    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryTreeDto> {
        let node = self
            .source
            .create_category(dto.name, &dto.product_ids)
            .await?;
        Ok(node.into())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::error::AppError;
    use crate::modules::catalog_store::MockStore;
    use crate::shared::test_helpers::{catalog_fixture, phones_fixture};

    fn service() -> CategoryService {
        let store = MockStore::new(catalog_fixture(), vec![], Duration::ZERO);
        CategoryService::new(Arc::new(store), 32)
    }

    #[tokio::test]
    async fn test_products_aggregates_subtree() {
        let service = service();

        let products = service.products(1).await.unwrap();
        assert_eq!(products.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        let apple = service.products(3).await.unwrap();
        assert_eq!(apple.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);
    }

    #[tokio::test]
    async fn test_products_of_unknown_category_is_not_found() {
        let service = service();

        assert!(matches!(
            service.products(77).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_uses_category_page_size() {
        let service = service();

        let page = service.list(&ListCategoriesQuery::default()).await.unwrap();

        assert_eq!(page.limit, DEFAULT_CATEGORY_PAGE_SIZE);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].total_product_count, 2);
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_malformed() {
        let store = MockStore::new(
            vec![phones_fixture(), phones_fixture()],
            vec![],
            Duration::ZERO,
        );
        let service = CategoryService::new(Arc::new(store), 32);

        assert!(matches!(
            service.list(&ListCategoriesQuery::default()).await,
            Err(AppError::MalformedTree(_))
        ));
    }

    #[tokio::test]
    async fn test_subtree_deeper_than_limit_is_malformed() {
        let store = MockStore::new(catalog_fixture(), vec![], Duration::ZERO);
        let service = CategoryService::new(Arc::new(store), 0);

        assert!(matches!(
            service.get_by_id(1).await,
            Err(AppError::MalformedTree(_))
        ));
        assert!(service.get_by_id(3).await.is_ok());
    }
}
