use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::catalog_views::dtos::{OpenViewQuery, ViewStateDto};
use crate::features::catalog_views::services::CatalogViewService;
use crate::features::categories::models::CategoryId;
use crate::shared::types::ApiResponse;

/// Open a category browse view
///
/// The category tree is fetched in the background; the returned view is in
/// `loading` state until it arrives.
#[utoipa::path(
    post,
    path = "/api/catalog-views",
    params(OpenViewQuery),
    responses(
        (status = 202, description = "View opened, tree loading", body = ApiResponse<ViewStateDto>),
        (status = 409, description = "Too many open views")
    ),
    tag = "catalog-views"
)]
pub async fn open_view(
    State(service): State<Arc<CatalogViewService>>,
    Query(query): Query<OpenViewQuery>,
) -> Result<(StatusCode, Json<ApiResponse<ViewStateDto>>)> {
    let opened = service.open(query).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(ApiResponse::success(
            Some(opened.state),
            Some("Catalog view opened".to_string()),
            None,
        )),
    ))
}

/// Get the current state of a view
#[utoipa::path(
    get,
    path = "/api/catalog-views/{view_id}",
    params(
        ("view_id" = Uuid, Path, description = "View id")
    ),
    responses(
        (status = 200, description = "View state", body = ApiResponse<ViewStateDto>),
        (status = 404, description = "View not found")
    ),
    tag = "catalog-views"
)]
pub async fn get_view(
    State(service): State<Arc<CatalogViewService>>,
    Path(view_id): Path<Uuid>,
) -> Result<Json<ApiResponse<ViewStateDto>>> {
    let state = service.state(view_id).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Close a view; a fetch still in flight is discarded when it lands
#[utoipa::path(
    delete,
    path = "/api/catalog-views/{view_id}",
    params(
        ("view_id" = Uuid, Path, description = "View id")
    ),
    responses(
        (status = 200, description = "View closed"),
        (status = 404, description = "View not found")
    ),
    tag = "catalog-views"
)]
pub async fn close_view(
    State(service): State<Arc<CatalogViewService>>,
    Path(view_id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.close(view_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Catalog view closed".to_string()),
        None,
    )))
}

/// Refetch the category tree; selection and expansion are cleared
#[utoipa::path(
    post,
    path = "/api/catalog-views/{view_id}/reload",
    params(
        ("view_id" = Uuid, Path, description = "View id")
    ),
    responses(
        (status = 202, description = "Reload started", body = ApiResponse<ViewStateDto>),
        (status = 404, description = "View not found")
    ),
    tag = "catalog-views"
)]
pub async fn reload_view(
    State(service): State<Arc<CatalogViewService>>,
    Path(view_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<ViewStateDto>>)> {
    let opened = service.reload(view_id).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(ApiResponse::success(Some(opened.state), None, None)),
    ))
}

/// Make a category active and show its aggregated products
#[utoipa::path(
    post,
    path = "/api/catalog-views/{view_id}/select/{category_id}",
    params(
        ("view_id" = Uuid, Path, description = "View id"),
        ("category_id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category selected", body = ApiResponse<ViewStateDto>),
        (status = 404, description = "View or category not found"),
        (status = 409, description = "Tree still loading or failed to load")
    ),
    tag = "catalog-views"
)]
pub async fn select_category(
    State(service): State<Arc<CatalogViewService>>,
    Path((view_id, category_id)): Path<(Uuid, CategoryId)>,
) -> Result<Json<ApiResponse<ViewStateDto>>> {
    let state = service.select(view_id, category_id).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Expand or collapse a category
#[utoipa::path(
    post,
    path = "/api/catalog-views/{view_id}/toggle/{category_id}",
    params(
        ("view_id" = Uuid, Path, description = "View id"),
        ("category_id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Expansion toggled", body = ApiResponse<ViewStateDto>),
        (status = 404, description = "View or category not found"),
        (status = 409, description = "Tree still loading or failed to load")
    ),
    tag = "catalog-views"
)]
pub async fn toggle_category(
    State(service): State<Arc<CatalogViewService>>,
    Path((view_id, category_id)): Path<(Uuid, CategoryId)>,
) -> Result<Json<ApiResponse<ViewStateDto>>> {
    let state = service.toggle(view_id, category_id).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum_test::TestServer;
    use serde_json::Value;

    use super::*;
    use crate::core::config::CatalogConfig;
    use crate::features::catalog_views::routes::routes;
    use crate::modules::catalog_store::MockStore;
    use crate::shared::test_helpers::catalog_fixture;

    fn server(latency: Duration) -> TestServer {
        let store = MockStore::new(catalog_fixture(), vec![], latency);
        let service = Arc::new(CatalogViewService::new(
            Arc::new(store),
            CatalogConfig::default(),
        ));
        TestServer::new(routes(service)).unwrap()
    }

    async fn open_ready(server: &TestServer) -> String {
        let response = server.post("/api/catalog-views").await;
        response.assert_status(StatusCode::ACCEPTED);
        let body: Value = response.json();
        let view_id = body["data"]["view_id"].as_str().unwrap().to_string();

        for _ in 0..50 {
            let body: Value = server
                .get(&format!("/api/catalog-views/{}", view_id))
                .await
                .json();
            if body["data"]["status"] != "loading" {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        view_id
    }

    #[tokio::test]
    async fn test_open_view_reports_loading() {
        let server = server(Duration::from_millis(200));

        let response = server.post("/api/catalog-views").await;

        response.assert_status(StatusCode::ACCEPTED);
        let body: Value = response.json();
        assert_eq!(body["data"]["status"], "loading");
        assert_eq!(body["data"]["rows"], serde_json::json!([]));

        let view_id = body["data"]["view_id"].as_str().unwrap();
        server
            .post(&format!("/api/catalog-views/{}/select/1", view_id))
            .await
            .assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_select_then_toggle() {
        let server = server(Duration::ZERO);
        let view_id = open_ready(&server).await;

        let response = server
            .post(&format!("/api/catalog-views/{}/select/2", view_id))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["status"], "ready");
        assert_eq!(body["data"]["active_category_id"], 2);
        assert_eq!(body["data"]["products"][1]["name"], "Galaxy Tab A9");

        let response = server
            .post(&format!("/api/catalog-views/{}/toggle/1", view_id))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["expanded_category_ids"], serde_json::json!([1]));
        assert_eq!(body["data"]["rows"][1]["name"], "Samsung");
        assert_eq!(body["data"]["rows"][1]["active"], true);
    }

    #[tokio::test]
    async fn test_unknown_category_is_404() {
        let server = server(Duration::ZERO);
        let view_id = open_ready(&server).await;

        server
            .post(&format!("/api/catalog-views/{}/select/404", view_id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_reload_clears_selection() {
        let server = server(Duration::ZERO);
        let view_id = open_ready(&server).await;
        server
            .post(&format!("/api/catalog-views/{}/select/3", view_id))
            .await
            .assert_status_ok();

        let response = server
            .post(&format!("/api/catalog-views/{}/reload", view_id))
            .await;

        response.assert_status(StatusCode::ACCEPTED);
        let body: Value = response.json();
        assert_eq!(body["data"]["status"], "loading");
        assert_eq!(body["data"]["active_category_id"], Value::Null);
    }

    #[tokio::test]
    async fn test_close_view() {
        let server = server(Duration::ZERO);
        let view_id = open_ready(&server).await;
        let path = format!("/api/catalog-views/{}", view_id);

        server.delete(&path).await.assert_status_ok();
        server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
        server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_view_id_is_rejected() {
        let server = server(Duration::ZERO);

        let response = server.get("/api/catalog-views/not-a-uuid").await;

        assert!(response.status_code().is_client_error());
    }
}
