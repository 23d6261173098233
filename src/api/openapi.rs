use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Category endpoints
        crate::api::routes::categories::create_category,
        crate::api::routes::categories::list_categories,
        crate::api::routes::categories::get_category,
        crate::api::routes::categories::update_category,
        crate::api::routes::categories::delete_category,
        // Subcategory endpoints
        crate::api::routes::subcategories::create_subcategory,
        crate::api::routes::subcategories::list_subcategories,
        // Product assignment endpoints
        crate::api::routes::products::assign_product_category,
        crate::api::routes::products::recompute_product_category_path,
        // Health check
        crate::api::routes::health,
        crate::api::routes::ready,
    ),
    components(
        schemas(
            crate::api::dtos::category_dto::CreateCategoryRequest,
            crate::api::dtos::category_dto::CreateSubcategoryRequest,
            crate::api::dtos::category_dto::UpdateCategoryRequest,
            crate::api::dtos::category_dto::CategoryResponse,
            crate::api::dtos::category_dto::CategoryTreeNodeResponse,
            crate::api::dtos::category_dto::CategoryTreeResponse,
            crate::api::dtos::category_dto::DeletedCategoryResponse,
            crate::api::dtos::product_dto::AssignProductCategoryRequest,
            crate::api::dtos::product_dto::CategoryPathEntryResponse,
            crate::api::dtos::product_dto::ProductCategoryResponse,
            crate::api::dtos::common::ErrorResponse,
        )
    ),
    tags(
        (name = "categories", description = "Category hierarchy management"),
        (name = "subcategories", description = "Subcategory management"),
        (name = "products", description = "Product category assignment"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "Catalog Backend API",
        version = "0.1.0",
        description = "Back-office category catalog and product assignment API",
    )
)]
pub struct ApiDoc;

pub fn configure_swagger_ui(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
