use std::collections::HashMap;

use crate::features::categories::models::CategoryId;

/// Active node and expansion flags for one category tree view
///
/// The two pieces of state are independent: selecting never touches an
/// expansion flag and toggling never touches the active node. Nodes are
/// identified by id, so a re-fetched tree with equal ids keeps matching.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    active: Option<CategoryId>,
    expanded: HashMap<CategoryId, bool>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `id` the active node, replacing any previous one
    pub fn select_node(&mut self, id: CategoryId) {
        self.active = Some(id);
    }

    /// Flip the expansion flag of `id` and return the new state
    pub fn toggle_expand(&mut self, id: CategoryId) -> bool {
        let flag = self.expanded.entry(id).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn is_active(&self, id: CategoryId) -> bool {
        self.active == Some(id)
    }

    /// Nodes start collapsed
    pub fn is_expanded(&self, id: CategoryId) -> bool {
        self.expanded.get(&id).copied().unwrap_or(false)
    }

    pub fn active(&self) -> Option<CategoryId> {
        self.active
    }

    /// Ids currently expanded, ascending
    pub fn expanded_ids(&self) -> Vec<CategoryId> {
        let mut ids: Vec<CategoryId> = self
            .expanded
            .iter()
            .filter_map(|(id, expanded)| expanded.then_some(*id))
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Back to the initial state: nothing active, everything collapsed
    pub fn reset(&mut self) {
        self.active = None;
        self.expanded.clear();
    }
}
