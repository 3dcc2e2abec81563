use utoipa::{Modify, OpenApi};

use crate::features::catalog_views::{dtos as views_dtos, handlers as views_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Products
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::delete_product,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::list_category_products,
        categories_handlers::create_category,
        // Catalog views
        views_handlers::open_view,
        views_handlers::get_view,
        views_handlers::close_view,
        views_handlers::reload_view,
        views_handlers::select_category,
        views_handlers::toggle_category,
    ),
    components(
        schemas(
            Meta,
            // Products
            products_dtos::ProductResponseDto,
            products_dtos::WarrantyEntryDto,
            products_dtos::ProductFormDto,
            ApiResponse<products_dtos::ProductResponseDto>,
            ApiResponse<Vec<products_dtos::ProductResponseDto>>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryTreeDto,
            categories_dtos::CreateCategoryDto,
            ApiResponse<categories_dtos::CategoryTreeDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            // Catalog views
            views_dtos::ViewStatus,
            views_dtos::VisibleRowDto,
            views_dtos::ViewStateDto,
            ApiResponse<views_dtos::ViewStateDto>,
        )
    ),
    tags(
        (name = "products", description = "Flat product table"),
        (name = "categories", description = "Category hierarchy and aggregated products"),
        (name = "catalog-views", description = "Stateful category browse views"),
    ),
    info(
        title = "Catalog Admin API",
        version = "0.1.0",
        description = "API documentation for the catalog admin dashboard",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_feature() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/products",
            "/api/products/{id}",
            "/api/categories/{id}/products",
            "/api/catalog-views/{view_id}/select/{category_id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Shop".to_string(),
            version: "9.9.9".to_string(),
            description: "Internal".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Shop");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Internal"));
    }
}
