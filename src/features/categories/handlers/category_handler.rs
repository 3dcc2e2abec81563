use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::ValidatedJson;
use crate::features::categories::dtos::{
    CategoryResponseDto, CategoryTreeDto, CreateCategoryDto, ListCategoriesQuery,
};
use crate::features::categories::models::CategoryId;
use crate::features::categories::services::CategoryService;
use crate::features::products::dtos::ProductResponseDto;
use crate::shared::types::{ApiResponse, Meta};

/// List top-level categories (paginated)
///
/// Returns summaries or tree structure based on `tree` query param.
#[utoipa::path(
    get,
    path = "/api/categories",
    params(ListCategoriesQuery),
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
    Query(query): Query<ListCategoriesQuery>,
) -> Result<Json<ApiResponse<serde_json::Value>>> {
    let (value, meta) = if query.tree {
        let page = service.list_tree(&query).await?;
        (serde_json::to_value(&page.items), Meta::page(&page))
    } else {
        let page = service.list(&query).await?;
        (serde_json::to_value(&page.items), Meta::page(&page))
    };
    let value = value.map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(ApiResponse::success(Some(value), None, Some(meta))))
}

/// Get category by id
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryTreeDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<CategoryId>,
) -> Result<Json<ApiResponse<CategoryTreeDto>>> {
    let category = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// List every product in a category and its subcategories
#[utoipa::path(
    get,
    path = "/api/categories/{id}/products",
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Aggregated products", body = ApiResponse<Vec<ProductResponseDto>>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn list_category_products(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<CategoryId>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let products = service.products(id).await?;
    let meta = Meta::total(products.len());
    Ok(Json(ApiResponse::success(Some(products), None, Some(meta))))
}

/// Create a top-level category
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryTreeDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Referenced product not found")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    ValidatedJson(dto): ValidatedJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryTreeDto>>)> {
    let category = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(category),
            Some("Category created".to_string()),
            None,
        )),
    ))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum_test::TestServer;
    use serde_json::{json, Value};

    use super::*;
    use crate::features::categories::routes::routes;
    use crate::modules::catalog_store::MockStore;
    use crate::shared::test_helpers::{catalog_fixture, product};

    fn server() -> TestServer {
        let store = MockStore::new(
            catalog_fixture(),
            vec![product(1, "Galaxy S10"), product(2, "Galaxy Tab A9")],
            Duration::ZERO,
        );
        let service = Arc::new(CategoryService::new(Arc::new(store), 32));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_list_categories_summaries() {
        let server = server();

        let response = server.get("/api/categories").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"][0]["name"], "Phones");
        assert_eq!(body["data"][0]["total_product_count"], 3);
        assert_eq!(body["meta"]["total"], 2);
    }

    #[tokio::test]
    async fn test_list_categories_tree() {
        let server = server();

        let response = server
            .get("/api/categories")
            .add_query_param("tree", true)
            .add_query_param("search", "phones")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"][0]["subcategories"][1]["name"], "Apple");
        assert_eq!(body["meta"]["total"], 1);
    }

    #[tokio::test]
    async fn test_category_products_are_aggregated() {
        let server = server();

        let response = server.get("/api/categories/1/products").await;

        response.assert_status_ok();
        let body: Value = response.json();
        let ids: Vec<i64> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|p| p["id"].as_i64())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_get_unknown_category_is_404() {
        let server = server();

        server
            .get("/api/categories/404")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_category() {
        let server = server();

        let response = server
            .post("/api/categories")
            .json(&json!({ "name": "Featured", "product_ids": [2] }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["id"], 12);
        assert_eq!(body["data"]["products"][0]["name"], "Galaxy Tab A9");

        server.get("/api/categories/12").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_create_category_validation() {
        let server = server();

        server
            .post("/api/categories")
            .json(&json!({ "name": "F" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .post("/api/categories")
            .json(&json!({ "name": "Featured", "product_ids": [42] }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
