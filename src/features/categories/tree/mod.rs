//! Traversal and integrity checks over the category forest.

mod integrity;
mod walker;

pub use integrity::{check_forest, TreeIntegrityError};
pub use walker::{aggregate_products, count_products, find_node};
