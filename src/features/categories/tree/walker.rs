use crate::features::categories::models::{CategoryId, CategoryNode};
use crate::features::products::models::Product;

/// Collect every product reachable from `node`, depth-first pre-order
///
/// The node's own products come first in stored order, followed by each
/// child's aggregate in child order. Nothing is sorted or de-duplicated. The
/// returned products are clones, independent of the tree.
pub fn aggregate_products(node: &CategoryNode) -> Vec<Product> {
    let mut products = Vec::new();
    collect_products(node, &mut products);
    products
}

fn collect_products(node: &CategoryNode, out: &mut Vec<Product>) {
    out.extend(node.products.iter().cloned());
    for child in &node.children {
        collect_products(child, out);
    }
}

/// Number of products [`aggregate_products`] would return, without cloning
pub fn count_products(node: &CategoryNode) -> usize {
    node.products.len() + node.children.iter().map(count_products).sum::<usize>()
}

/// Find a node anywhere in the forest by id (pre-order, first match)
pub fn find_node(forest: &[CategoryNode], id: CategoryId) -> Option<&CategoryNode> {
    forest.iter().find_map(|node| {
        if node.id == id {
            Some(node)
        } else {
            find_node(&node.children, id)
        }
    })
}
