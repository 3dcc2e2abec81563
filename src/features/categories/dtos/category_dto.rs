use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::categories::models::{CategoryId, CategoryNode};
use crate::features::categories::tree::count_products;
use crate::features::products::dtos::ProductResponseDto;

/// Response DTO for category (one row of the category listing)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: CategoryId,
    pub name: String,
    /// Products attached directly to this category
    pub product_count: usize,
    /// Products in this category and all subcategories
    pub total_product_count: usize,
    pub subcategory_count: usize,
}

impl From<&CategoryNode> for CategoryResponseDto {
    fn from(node: &CategoryNode) -> Self {
        Self {
            id: node.id,
            name: node.name.clone(),
            product_count: node.products.len(),
            total_product_count: count_products(node),
            subcategory_count: node.children.len(),
        }
    }
}

/// Response DTO for category tree (hierarchical structure)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(no_recursion)]
pub struct CategoryTreeDto {
    pub id: CategoryId,
    pub name: String,
    pub products: Vec<ProductResponseDto>,
    pub subcategories: Vec<CategoryTreeDto>,
}

impl From<CategoryNode> for CategoryTreeDto {
    fn from(node: CategoryNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            products: node.products.into_iter().map(Into::into).collect(),
            subcategories: node.children.into_iter().map(Into::into).collect(),
        }
    }
}

/// Request DTO for creating a category from the category form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 2, message = "Category name must be at least 2 characters."))]
    pub name: String,

    /// Ids of existing products to place in the category, in display order
    #[serde(default)]
    pub product_ids: Vec<i64>,
}

/// Query params for listing categories
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListCategoriesQuery {
    /// If true, return tree structure. Default: false (summaries)
    #[serde(default)]
    pub tree: bool,
    /// Page number (1-indexed, default: 1)
    pub page: Option<usize>,
    /// Top-level categories per page (default: 5, max: 100)
    pub limit: Option<usize>,
    /// Search over top-level category names
    pub search: Option<String>,
}
