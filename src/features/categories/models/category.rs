use crate::features::products::models::Product;

pub type CategoryId = i64;

/// One node of the category hierarchy
///
/// A node exclusively owns its direct products and its subcategories, so the
/// hierarchy is always a tree. Ids are expected to be unique across the whole
/// forest; that is checked by [`crate::features::categories::tree::check_forest`],
/// not here.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryNode {
    pub id: CategoryId,
    pub name: String,
    pub products: Vec<Product>,
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            products: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_children(mut self, children: Vec<CategoryNode>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
