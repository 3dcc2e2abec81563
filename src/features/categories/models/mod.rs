mod category;

pub use category::{CategoryId, CategoryNode};
