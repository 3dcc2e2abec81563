use std::sync::Arc;

use crate::core::error::Result;
use crate::features::products::dtos::{ListProductsQuery, ProductFormDto, ProductResponseDto};
use crate::modules::catalog_store::{CatalogSource, ProductFilter};
use crate::shared::constants::{CATEGORY_FILTER_SEPARATOR, DEFAULT_PRODUCT_PAGE_SIZE};
use crate::shared::types::{Page, PageRequest};

/// Service for the flat product records behind the product table and form
pub struct ProductService {
    source: Arc<dyn CatalogSource>,
}

impl ProductService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// List products, filtered by category labels and search text
    pub async fn list(&self, query: ListProductsQuery) -> Result<Page<ProductResponseDto>> {
        let categories = query
            .categories
            .as_deref()
            .map(|raw| {
                raw.split(CATEGORY_FILTER_SEPARATOR)
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let filter = ProductFilter {
            page: PageRequest::new(query.page, query.limit, DEFAULT_PRODUCT_PAGE_SIZE),
            categories,
            search: query.search.filter(|s| !s.trim().is_empty()),
        };

        let page = self.source.list_products(&filter).await?;
        Ok(page.map(Into::into))
    }

    pub async fn get(&self, id: i64) -> Result<ProductResponseDto> {
        Ok(self.source.get_product(id).await?.into())
    }

    pub async fn create(&self, dto: ProductFormDto) -> Result<ProductResponseDto> {
        Ok(self.source.create_product(dto.into()).await?.into())
    }

    pub async fn update(&self, id: i64, dto: ProductFormDto) -> Result<ProductResponseDto> {
        Ok(self.source.update_product(id, dto.into()).await?.into())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.source.delete_product(id).await
    }
}
