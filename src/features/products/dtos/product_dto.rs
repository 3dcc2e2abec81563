use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::products::models::{Product, ProductDraft, WarrantyEntry};
use crate::shared::validation::IMAGE_URL_REGEX;

/// Response DTO for product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "600.00")]
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub discount_price: Option<Decimal>,
    pub category: String,
    pub photo_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub warranty_info: Vec<WarrantyEntryDto>,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            discount_price: p.discount_price,
            category: p.category,
            photo_url: p.photo_url,
            created_at: p.created_at,
            updated_at: p.updated_at,
            warranty_info: p.warranty_info.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct WarrantyEntryDto {
    #[validate(length(min = 5, message = "Content must be at least 5 characters."))]
    pub content: String,
}

impl From<WarrantyEntry> for WarrantyEntryDto {
    fn from(w: WarrantyEntry) -> Self {
        Self { content: w.content }
    }
}

/// Request DTO for creating or replacing a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductFormDto {
    #[validate(length(min = 2, message = "Product name must be at least 2 characters."))]
    pub name: String,

    #[validate(length(min = 10, message = "Description must be at least 10 characters."))]
    pub description: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(custom(function = "crate::shared::validation::validate_positive_price"))]
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,

    #[validate(custom(function = "crate::shared::validation::validate_positive_price"))]
    #[schema(value_type = Option<String>)]
    pub discount_price: Option<Decimal>,

    #[validate(
        url(message = "Photo URL must be valid"),
        regex(
            path = *IMAGE_URL_REGEX,
            message = ".jpg, .jpeg, .png and .webp files are accepted."
        )
    )]
    pub photo_url: String,

    #[serde(default)]
    #[validate(nested)]
    pub warranty_info: Vec<WarrantyEntryDto>,
}

impl From<ProductFormDto> for ProductDraft {
    fn from(dto: ProductFormDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            discount_price: dto.discount_price,
            category: dto.category,
            photo_url: dto.photo_url,
            warranty_info: dto
                .warranty_info
                .into_iter()
                .map(|w| WarrantyEntry::new(w.content))
                .collect(),
        }
    }
}

/// Query params for the product table
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListProductsQuery {
    /// Page number (1-indexed, default: 1)
    pub page: Option<usize>,
    /// Items per page (default: 10, max: 100)
    pub limit: Option<usize>,
    /// Category labels separated by '.', e.g. `Books.Toys`
    pub categories: Option<String>,
    /// Free-text search over name, description and category
    pub search: Option<String>,
}
