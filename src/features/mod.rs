pub mod catalog_views;
pub mod categories;
pub mod products;
