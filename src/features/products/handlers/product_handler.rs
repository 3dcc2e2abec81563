use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::ValidatedJson;
use crate::features::products::dtos::{ListProductsQuery, ProductFormDto, ProductResponseDto};
use crate::features::products::services::ProductService;
use crate::shared::types::{ApiResponse, Meta};

/// List products (paginated)
#[utoipa::path(
    get,
    path = "/api/products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let page = service.list(query).await?;
    let meta = Meta::page(&page);

    Ok(Json(ApiResponse::success(Some(page.items), None, Some(meta))))
}

/// Get product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Create a product from the product form
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductFormDto,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "products"
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    ValidatedJson(dto): ValidatedJson<ProductFormDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponseDto>>)> {
    let product = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(product),
            Some("Product created".to_string()),
            None,
        )),
    ))
}

/// Replace a product's fields
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    request_body = ProductFormDto,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<ProductFormDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(product),
        Some("Product updated".to_string()),
        None,
    )))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some(format!("Product with ID {} deleted", id)),
        None,
    )))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum_test::TestServer;
    use serde_json::{json, Value};

    use super::*;
    use crate::features::products::routes::routes;
    use crate::modules::catalog_store::MockStore;
    use crate::shared::test_helpers::product;

    fn server() -> TestServer {
        let store = MockStore::new(
            vec![],
            vec![product(1, "Galaxy S10"), product(2, "Galaxy Tab A9")],
            Duration::ZERO,
        );
        let service = Arc::new(ProductService::new(Arc::new(store)));
        TestServer::new(routes(service)).unwrap()
    }

    fn form() -> Value {
        json!({
            "name": "Pixel 9",
            "description": "Google phone with a great camera",
            "category": "Electronics",
            "price": "799.00",
            "photo_url": "https://example.com/pixel-9.webp",
            "warranty_info": [{ "content": "2-year warranty" }]
        })
    }

    #[tokio::test]
    async fn test_list_products_returns_page_meta() {
        let server = server();

        let response = server.get("/api/products").add_query_param("limit", 1).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["meta"]["limit"], 1);
    }

    #[tokio::test]
    async fn test_get_missing_product_is_404() {
        let server = server();

        let response = server.get("/api/products/999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Product with ID 999 not found");
    }

    #[tokio::test]
    async fn test_create_update_delete_product() {
        let server = server();

        let created = server.post("/api/products").json(&form()).await;
        created.assert_status(StatusCode::CREATED);
        let body: Value = created.json();
        assert_eq!(body["data"]["id"], 3);
        assert_eq!(body["data"]["price"], "799.00");

        let mut changed = form();
        changed["name"] = json!("Pixel 9 Pro");
        let updated = server.put("/api/products/3").json(&changed).await;
        updated.assert_status_ok();
        assert_eq!(updated.json::<Value>()["data"]["name"], "Pixel 9 Pro");

        server.delete("/api/products/3").await.assert_status_ok();
        server
            .get("/api/products/3")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_form() {
        let server = server();
        let mut invalid = form();
        invalid["description"] = json!("too short");

        let response = server.post("/api/products").json(&invalid).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["errors"].is_array());
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_json() {
        let server = server();

        let response = server
            .post("/api/products")
            .json(&json!({ "name": "Missing everything else" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_recreated_product_gets_fresh_id() {
        let server = server();

        server.delete("/api/products/2").await.assert_status_ok();
        let created = server.post("/api/products").json(&form()).await;

        created.assert_status(StatusCode::CREATED);
        assert_eq!(created.json::<Value>()["data"]["id"], 3);
        server
            .get("/api/products/2")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_huge_page_number_returns_empty_page() {
        let server = server();

        let response = server
            .get("/api/products")
            .add_query_param("page", usize::MAX)
            .add_query_param("limit", 100)
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["meta"]["total"], 2);
    }
}
