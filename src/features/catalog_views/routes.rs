use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::catalog_views::handlers;
use crate::features::catalog_views::services::CatalogViewService;

/// Create routes for the catalog views feature
pub fn routes(service: Arc<CatalogViewService>) -> Router {
    Router::new()
        .route("/api/catalog-views", post(handlers::open_view))
        .route(
            "/api/catalog-views/{view_id}",
            get(handlers::get_view).delete(handlers::close_view),
        )
        .route(
            "/api/catalog-views/{view_id}/reload",
            post(handlers::reload_view),
        )
        .route(
            "/api/catalog-views/{view_id}/select/{category_id}",
            post(handlers::select_category),
        )
        .route(
            "/api/catalog-views/{view_id}/toggle/{category_id}",
            post(handlers::toggle_category),
        )
        .with_state(service)
}
