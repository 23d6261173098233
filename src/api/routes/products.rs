use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::api::dtos::{AssignProductCategoryRequest, ProductCategoryResponse};
use crate::api::routes::AppState;
use crate::error::AppResult;
use crate::middleware::principal::AdminPrincipal;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("/{id}/category", web::put().to(assign_product_category))
            .route(
                "/{id}/category/recompute",
                web::post().to(recompute_product_category_path),
            ),
    );
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}/category",
    request_body = AssignProductCategoryRequest,
    responses(
        (status = 200, description = "Assignment persisted", body = ProductCategoryResponse),
        (status = 400, description = "Inactive category, bad subcategory or invalid relationship"),
        (status = 404, description = "Product or category does not exist"),
    ),
    tag = "products"
)]
pub async fn assign_product_category(
    state: web::Data<AppState>,
    _principal: AdminPrincipal,
    path: web::Path<Uuid>,
    payload: web::Json<AssignProductCategoryRequest>,
) -> AppResult<HttpResponse> {
    let payload = payload.into_inner();

    let product = state
        .product_service
        .assign_category(
            path.into_inner(),
            payload.category_id,
            payload.subcategory_id,
            payload.category_path,
        )
        .await?;

    Ok(HttpResponse::Ok().json(ProductCategoryResponse::from(product)))
}

#[utoipa::path(
    post,
    path = "/api/v1/products/{id}/category/recompute",
    responses(
        (status = 200, description = "Breadcrumb re-materialized", body = ProductCategoryResponse),
        (status = 400, description = "Product has no assignment to recompute"),
        (status = 404, description = "Product does not exist"),
    ),
    tag = "products"
)]
pub async fn recompute_product_category_path(
    state: web::Data<AppState>,
    _principal: AdminPrincipal,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let product = state
        .product_service
        .recompute_path(path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ProductCategoryResponse::from(product)))
}
