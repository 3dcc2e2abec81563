use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::catalog_views::browser::{CategoryBrowser, LoadState, VisibleRow};
use crate::features::categories::models::CategoryId;
use crate::features::products::dtos::ProductResponseDto;

/// Category filter for the tree a view fetches; passed to the store unchanged
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct OpenViewQuery {
    /// Page of top-level categories (1-indexed, default: 1)
    pub page: Option<usize>,
    /// Top-level categories per page (default: 10)
    pub limit: Option<usize>,
    /// Search over top-level category names
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    Loading,
    Ready,
    Failed,
}

/// One visible line of the category tree
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VisibleRowDto {
    pub id: CategoryId,
    pub name: String,
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
    pub active: bool,
    pub direct_product_count: usize,
}

impl From<VisibleRow> for VisibleRowDto {
    fn from(row: VisibleRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            depth: row.depth,
            has_children: row.has_children,
            expanded: row.expanded,
            active: row.active,
            direct_product_count: row.direct_product_count,
        }
    }
}

/// Everything the category screen needs to draw itself
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ViewStateDto {
    pub view_id: Uuid,
    pub status: ViewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub active_category_id: Option<CategoryId>,
    pub expanded_category_ids: Vec<CategoryId>,
    pub rows: Vec<VisibleRowDto>,
    /// Products of the active category and its subcategories
    pub products: Vec<ProductResponseDto>,
}

impl ViewStateDto {
    pub fn from_browser(view_id: Uuid, browser: &CategoryBrowser) -> Self {
        let (status, error) = match browser.load_state() {
            LoadState::Loading => (ViewStatus::Loading, None),
            LoadState::Ready(_) => (ViewStatus::Ready, None),
            LoadState::Failed(reason) => (ViewStatus::Failed, Some(reason.clone())),
        };

        Self {
            view_id,
            status,
            error,
            active_category_id: browser.active(),
            expanded_category_ids: browser.expanded_ids(),
            rows: browser.visible_rows().into_iter().map(Into::into).collect(),
            products: browser
                .displayed_products()
                .iter()
                .cloned()
                .map(Into::into)
                .collect(),
        }
    }
}
