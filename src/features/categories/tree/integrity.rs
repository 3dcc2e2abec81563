use std::collections::HashSet;

use thiserror::Error;

use crate::features::categories::models::{CategoryId, CategoryNode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeIntegrityError {
    #[error("category id {0} appears more than once")]
    DuplicateId(CategoryId),

    #[error("category {id} is nested {depth} levels deep")]
    TooDeep { id: CategoryId, depth: usize },
}

/// Validate a fetched forest before it is used for display
///
/// Rejects duplicate ids anywhere in the forest and nodes deeper than
/// `max_depth` (roots are depth 0). The walk is iterative so a pathological
/// input cannot exhaust the stack before the depth bound is hit.
pub fn check_forest(forest: &[CategoryNode], max_depth: usize) -> Result<(), TreeIntegrityError> {
    let mut seen = HashSet::new();
    let mut stack: Vec<(&CategoryNode, usize)> = forest.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        if depth > max_depth {
            return Err(TreeIntegrityError::TooDeep { id: node.id, depth });
        }
        if !seen.insert(node.id) {
            return Err(TreeIntegrityError::DuplicateId(node.id));
        }
        stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{catalog_fixture, phones_fixture};

    #[test]
    fn test_check_forest_accepts_fixture() {
        assert_eq!(check_forest(&catalog_fixture(), 8), Ok(()));
        assert_eq!(check_forest(&[], 0), Ok(()));
    }

    #[test]
    fn test_check_forest_rejects_duplicate_across_roots() {
        let forest = vec![phones_fixture(), CategoryNode::new(2, "Samsung again")];

        assert_eq!(
            check_forest(&forest, 8),
            Err(TreeIntegrityError::DuplicateId(2))
        );
    }

    #[test]
    fn test_check_forest_rejects_duplicate_within_subtree() {
        let node = CategoryNode::new(1, "Root").with_children(vec![
            CategoryNode::new(2, "A"),
            CategoryNode::new(3, "B").with_children(vec![CategoryNode::new(1, "Root copy")]),
        ]);

        assert_eq!(
            check_forest(&[node], 8),
            Err(TreeIntegrityError::DuplicateId(1))
        );
    }

    #[test]
    fn test_check_forest_enforces_depth_bound() {
        let mut node = CategoryNode::new(10, "Leaf");
        for id in (0..10).rev() {
            node = CategoryNode::new(id, format!("Level {}", id)).with_children(vec![node]);
        }

        assert_eq!(check_forest(std::slice::from_ref(&node), 10), Ok(()));
        assert_eq!(
            check_forest(&[node], 9),
            Err(TreeIntegrityError::TooDeep { id: 10, depth: 10 })
        );
    }
}
