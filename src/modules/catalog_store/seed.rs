use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use fake::faker::lorem::en::{Sentence, Words};
use fake::rand::rngs::StdRng;
use fake::rand::SeedableRng;
use fake::Fake;
use rust_decimal::Decimal;

use crate::features::categories::models::CategoryNode;
use crate::features::products::models::{Product, WarrantyEntry};
use crate::shared::constants::SAMPLE_PHOTO_BASE_URL;

const PRODUCT_LABELS: &[&str] = &[
    "Electronics",
    "Furniture",
    "Clothing",
    "Toys",
    "Groceries",
    "Books",
    "Jewelry",
    "Beauty Products",
];

const STANDARD_WARRANTY: &[&str] = &[
    "12 months for manufacturing defects",
    "6 months for display issues",
    "Physical damage, water damage, unauthorized repairs are not covered",
    "Repair time is 1-3 hours",
    "Warranty period is 12 months",
];

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
        .unwrap_or_default()
}

/// Flat product records with generated names, prices and dates
///
/// Deterministic for a given seed; ids run from 1 to `count`.
pub fn generated_products(seed: u64, count: usize) -> Vec<Product> {
    let mut rng = StdRng::seed_from_u64(seed);
    let epoch = day(2022, 1, 1);

    (1..=count as i64)
        .map(|id| {
            let words: Vec<String> = Words(2..4).fake_with_rng(&mut rng);
            let name = words
                .iter()
                .map(|w| capitalize(w))
                .collect::<Vec<_>>()
                .join(" ");
            let description: String = Sentence(6..12).fake_with_rng(&mut rng);
            let price_cents: i64 = (500..50_000i64).fake_with_rng(&mut rng);
            let discount_cents: i64 = (500..price_cents.max(501)).fake_with_rng(&mut rng);
            let label: usize = (0..PRODUCT_LABELS.len()).fake_with_rng(&mut rng);
            let created_offset: i64 = (0..730i64).fake_with_rng(&mut rng);
            let updated_offset: i64 = (0..60i64).fake_with_rng(&mut rng);
            let created_at = epoch + Duration::days(created_offset);

            Product {
                id,
                name,
                description,
                price: Decimal::new(price_cents, 2),
                discount_price: Some(Decimal::new(discount_cents, 2)),
                category: PRODUCT_LABELS[label].to_string(),
                photo_url: format!("{}/{}.png", SAMPLE_PHOTO_BASE_URL, id),
                created_at,
                updated_at: created_at + Duration::days(updated_offset),
                warranty_info: STANDARD_WARRANTY
                    .iter()
                    .map(|c| WarrantyEntry::new(*c))
                    .collect(),
            }
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_product(
    id: i64,
    name: &str,
    description: &str,
    price: i64,
    label: &str,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
    warranty: &str,
) -> Product {
    let slug = name.to_lowercase().replace(' ', "-");
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::from(price),
        discount_price: None,
        category: label.to_string(),
        photo_url: format!("https://example.com/{}.jpg", slug),
        created_at: created,
        updated_at: updated,
        warranty_info: vec![WarrantyEntry::new(warranty)],
    }
}

/// The fixed demo hierarchy shown on the category screen
pub fn demo_categories() -> Vec<CategoryNode> {
    vec![
        CategoryNode::new(2, "Danh Mục Sản Phẩm").with_children(vec![
            CategoryNode::new(3, "Điện thoại").with_children(vec![
                CategoryNode::new(4, "Samsung").with_products(vec![
                    demo_product(
                        201,
                        "Galaxy S10",
                        "High-performance smartphone",
                        600,
                        "Samsung",
                        day(2024, 1, 10),
                        day(2024, 2, 10),
                        "1-year warranty",
                    ),
                    demo_product(
                        202,
                        "Galaxy Tab A9",
                        "Affordable tablet",
                        300,
                        "Samsung",
                        day(2024, 1, 20),
                        day(2024, 2, 15),
                        "1-year warranty",
                    ),
                ]),
                CategoryNode::new(5, "iPhone").with_products(vec![demo_product(
                    301,
                    "iPhone 13",
                    "Latest iPhone model",
                    1000,
                    "iPhone",
                    day(2024, 1, 15),
                    day(2024, 2, 25),
                    "2-year warranty",
                )]),
            ]),
            CategoryNode::new(6, "Máy tính bảng").with_children(vec![
                CategoryNode::new(7, "iPad").with_products(vec![demo_product(
                    401,
                    "iPad Air",
                    "High-performance iPad",
                    800,
                    "iPad",
                    day(2024, 1, 5),
                    day(2024, 2, 5),
                    "1-year warranty",
                )]),
                CategoryNode::new(8, "Xiaomi").with_products(vec![demo_product(
                    402,
                    "Xiaomi Pad",
                    "Affordable Xiaomi tablet",
                    400,
                    "Xiaomi",
                    day(2024, 1, 12),
                    day(2024, 2, 10),
                    "1-year warranty",
                )]),
            ]),
        ]),
        CategoryNode::new(9, "Laptop").with_children(vec![
            CategoryNode::new(10, "Macbook").with_products(vec![demo_product(
                501,
                "Macbook Pro",
                "Powerful Macbook Pro",
                2000,
                "Macbook",
                day(2024, 2, 15),
                day(2024, 3, 1),
                "2-year warranty",
            )]),
            CategoryNode::new(11, "Dell").with_products(vec![demo_product(
                502,
                "Dell XPS 13",
                "Compact and powerful Dell laptop",
                1500,
                "Dell",
                day(2024, 1, 25),
                day(2024, 2, 10),
                "1-year warranty",
            )]),
        ]),
        CategoryNode::new(12, "Khuyến mãi").with_children(vec![
            CategoryNode::new(13, "Giờ vàng giá sốc").with_products(vec![demo_product(
                601,
                "Flash Sale Item",
                "Discounted item for a limited time",
                100,
                "Giờ vàng giá sốc",
                day(2024, 2, 5),
                day(2024, 2, 10),
                "No warranty",
            )]),
            CategoryNode::new(14, "Thời trang giảm giá").with_products(vec![demo_product(
                602,
                "Discounted Jacket",
                "Warm jacket on discount",
                80,
                "Thời trang giảm giá",
                day(2024, 2, 10),
                day(2024, 2, 15),
                "6-month warranty",
            )]),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::tree::{aggregate_products, check_forest};

    #[test]
    fn test_generated_products_are_deterministic() {
        let first = generated_products(7, 5);
        let second = generated_products(7, 5);

        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn test_generated_products_have_valid_fields() {
        for product in generated_products(42, 20) {
            assert!(!product.name.is_empty());
            assert!(product.price > Decimal::ZERO);
            assert!(product.discount_price.is_some_and(|d| d > Decimal::ZERO));
            assert!(PRODUCT_LABELS.contains(&product.category.as_str()));
            assert!(product.updated_at >= product.created_at);
        }
    }

    #[test]
    fn test_demo_categories_form_a_valid_forest() {
        let forest = demo_categories();

        assert_eq!(check_forest(&forest, 4), Ok(()));
        let ids: Vec<i64> = aggregate_products(&forest[0]).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![201, 202, 301, 401, 402]);
    }
}
