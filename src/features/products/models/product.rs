use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Product record as held by the catalog store
///
/// `category` is a display label only; it does not reference a category node.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub category: String,
    pub photo_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub warranty_info: Vec<WarrantyEntry>,
}

/// One free-text line of warranty terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarrantyEntry {
    pub content: String,
}

impl WarrantyEntry {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Field values for creating or replacing a product
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub category: String,
    pub photo_url: String,
    pub warranty_info: Vec<WarrantyEntry>,
}
