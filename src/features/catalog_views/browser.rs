use crate::core::error::{AppError, Result};
use crate::features::catalog_views::selection::SelectionController;
use crate::features::categories::models::{CategoryId, CategoryNode};
use crate::features::categories::tree::{aggregate_products, check_forest, find_node};
use crate::features::products::models::Product;

/// Proof that a fetch was started; only the latest ticket may complete it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Vec<CategoryNode>),
    Failed(String),
}

/// One displayed line of the category tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub id: CategoryId,
    pub name: String,
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
    pub active: bool,
    pub direct_product_count: usize,
}

/// State behind one category browse screen
///
/// Owns the fetched forest, the selection/expansion state and the product
/// list shown for the active node. While a fetch is outstanding, or after it
/// failed, selection and expansion are refused.
#[derive(Debug)]
pub struct CategoryBrowser {
    generation: u64,
    load: LoadState,
    selection: SelectionController,
    displayed: Vec<Product>,
    max_depth: usize,
}

impl CategoryBrowser {
    pub fn new(max_depth: usize) -> Self {
        Self {
            generation: 0,
            load: LoadState::Loading,
            selection: SelectionController::new(),
            displayed: Vec::new(),
            max_depth,
        }
    }

    /// Start a (re)fetch: invalidates any outstanding ticket and resets the view
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.load = LoadState::Loading;
        self.selection.reset();
        self.displayed.clear();
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Install a fetch result; returns false when the ticket is stale
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<CategoryNode>>,
    ) -> bool {
        if ticket.generation != self.generation || self.load != LoadState::Loading {
            tracing::debug!(
                "Discarding stale category tree response (generation {} != {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.load = match result.and_then(|forest| {
            check_forest(&forest, self.max_depth)?;
            Ok(forest)
        }) {
            Ok(forest) => LoadState::Ready(forest),
            Err(e) => {
                tracing::warn!("Category tree fetch failed: {}", e);
                LoadState::Failed(e.to_string())
            }
        };
        true
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn forest(&self) -> Option<&[CategoryNode]> {
        match &self.load {
            LoadState::Ready(forest) => Some(forest),
            _ => None,
        }
    }

    fn ready_node(&self, id: CategoryId) -> Result<&CategoryNode> {
        let forest = match &self.load {
            LoadState::Ready(forest) => forest,
            LoadState::Loading => {
                return Err(AppError::Conflict(
                    "Catalog is still loading; try again when it is ready".to_string(),
                ))
            }
            LoadState::Failed(reason) => {
                return Err(AppError::Conflict(format!(
                    "Catalog failed to load ({}); reload the view",
                    reason
                )))
            }
        };

        find_node(forest, id)
            .ok_or_else(|| AppError::NotFound(format!("Category with ID {} not found", id)))
    }

    /// Make `id` active and recompute the displayed products for it
    pub fn select(&mut self, id: CategoryId) -> Result<()> {
        if self.selection.is_active(id) && self.forest().is_some() {
            return Ok(());
        }

        let products = aggregate_products(self.ready_node(id)?);
        self.selection.select_node(id);
        self.displayed = products;
        Ok(())
    }

    /// Flip the expansion flag of `id`; returns the new state
    pub fn toggle_expand(&mut self, id: CategoryId) -> Result<bool> {
        self.ready_node(id)?;
        Ok(self.selection.toggle_expand(id))
    }

    pub fn is_active(&self, id: CategoryId) -> bool {
        self.selection.is_active(id)
    }

    pub fn is_expanded(&self, id: CategoryId) -> bool {
        self.selection.is_expanded(id)
    }

    pub fn active(&self) -> Option<CategoryId> {
        self.selection.active()
    }

    pub fn expanded_ids(&self) -> Vec<CategoryId> {
        self.selection.expanded_ids()
    }

    /// Products of the active node and all its descendants
    pub fn displayed_products(&self) -> &[Product] {
        &self.displayed
    }

    /// Rows to draw: pre-order, descending only into expanded nodes
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        if let Some(forest) = self.forest() {
            self.push_rows(forest, 0, &mut rows);
        }
        rows
    }

    fn push_rows(&self, nodes: &[CategoryNode], depth: usize, rows: &mut Vec<VisibleRow>) {
        for node in nodes {
            let expanded = self.selection.is_expanded(node.id);
            rows.push(VisibleRow {
                id: node.id,
                name: node.name.clone(),
                depth,
                has_children: node.has_children(),
                expanded,
                active: self.selection.is_active(node.id),
                direct_product_count: node.products.len(),
            });
            if expanded {
                self.push_rows(&node.children, depth + 1, rows);
            }
        }
    }
}
