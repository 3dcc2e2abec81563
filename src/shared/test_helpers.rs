#[cfg(test)]
use crate::features::categories::models::CategoryNode;
#[cfg(test)]
use crate::features::products::models::{Product, WarrantyEntry};

#[cfg(test)]
use chrono::{TimeZone, Utc};
#[cfg(test)]
use rust_decimal::Decimal;

#[cfg(test)]
pub fn product(id: i64, name: &str) -> Product {
    let created_at = Utc
        .with_ymd_and_hms(2024, 1, 10, 0, 0, 0)
        .single()
        .unwrap_or_default();
    Product {
        id,
        name: name.to_string(),
        description: format!("{} description", name),
        price: Decimal::new(100 * id, 0),
        discount_price: None,
        category: "Test".to_string(),
        photo_url: format!("https://example.com/{}.jpg", id),
        created_at,
        updated_at: created_at,
        warranty_info: vec![WarrantyEntry::new("1-year warranty")],
    }
}

/// `Phones { [], [Samsung { [P1, P2] }, Apple { [P3] }] }`
#[cfg(test)]
pub fn phones_fixture() -> CategoryNode {
    CategoryNode::new(1, "Phones").with_children(vec![
        CategoryNode::new(2, "Samsung")
            .with_products(vec![product(1, "Galaxy S10"), product(2, "Galaxy Tab A9")]),
        CategoryNode::new(3, "Apple").with_products(vec![product(3, "iPhone 13")]),
    ])
}

/// Phones plus a second root with its own subtree
#[cfg(test)]
pub fn catalog_fixture() -> Vec<CategoryNode> {
    vec![
        phones_fixture(),
        CategoryNode::new(9, "Laptop").with_children(vec![
            CategoryNode::new(10, "Macbook").with_products(vec![product(501, "Macbook Pro")]),
            CategoryNode::new(11, "Dell").with_products(vec![product(502, "Dell XPS 13")]),
        ]),
    ]
}
