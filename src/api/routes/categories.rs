use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{
    CategoryListQuery, CategoryResponse, CategoryTreeNodeResponse, CategoryTreeResponse,
    CreateCategoryRequest, DeletedCategoryResponse, PaginationMeta, UpdateCategoryRequest,
};
use crate::api::routes::AppState;
use crate::application::{CreateCategoryInput, UpdateCategoryInput};
use crate::error::AppResult;
use crate::middleware::principal::AdminPrincipal;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .route("", web::post().to(create_category))
            .route("", web::get().to(list_categories))
            .route("/{id}", web::get().to(get_category))
            .route("/{id}", web::put().to(update_category))
            .route("/{id}", web::delete().to(delete_category)),
    );
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Invalid name or description"),
        (status = 409, description = "Name or slug already taken"),
    ),
    tag = "categories"
)]
pub async fn create_category(
    state: web::Data<AppState>,
    principal: AdminPrincipal,
    payload: web::Json<CreateCategoryRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;
    let payload = payload.into_inner();

    let category = state
        .category_service
        .create(
            &principal.0,
            CreateCategoryInput {
                name: payload.name,
                description: payload.description,
                parent_id: None,
            },
        )
        .await?;

    Ok(HttpResponse::Created().json(CategoryResponse::from(category)))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(CategoryListQuery),
    responses(
        (status = 200, description = "Hierarchical category listing", body = CategoryTreeResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    state: web::Data<AppState>,
    _principal: AdminPrincipal,
    query: web::Query<CategoryListQuery>,
) -> AppResult<HttpResponse> {
    query.validate()?;
    let query = query.into_inner();

    let page = state
        .category_service
        .list_tree(query.search, query.is_active, query.page, query.limit)
        .await?;

    Ok(HttpResponse::Ok().json(CategoryTreeResponse {
        categories: page
            .tree
            .into_iter()
            .map(CategoryTreeNodeResponse::from)
            .collect(),
        pagination: PaginationMeta::new(page.total_roots, query.page, query.limit),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    responses(
        (status = 200, description = "Category details", body = CategoryResponse),
        (status = 404, description = "Category does not exist"),
    ),
    tag = "categories"
)]
pub async fn get_category(
    state: web::Data<AppState>,
    _principal: AdminPrincipal,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let category = state.category_service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CategoryResponse::from(category)))
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Invalid or empty patch"),
        (status = 404, description = "Category does not exist"),
        (status = 409, description = "Name or slug already taken"),
    ),
    tag = "categories"
)]
pub async fn update_category(
    state: web::Data<AppState>,
    _principal: AdminPrincipal,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateCategoryRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;
    let payload = payload.into_inner();

    let category = state
        .category_service
        .update(
            path.into_inner(),
            UpdateCategoryInput {
                name: payload.name,
                description: payload.description,
                is_active: payload.is_active,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(CategoryResponse::from(category)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    responses(
        (status = 200, description = "Category deleted", body = DeletedCategoryResponse),
        (status = 404, description = "Category does not exist"),
    ),
    tag = "categories"
)]
pub async fn delete_category(
    state: web::Data<AppState>,
    _principal: AdminPrincipal,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let deleted = state.category_service.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeletedCategoryResponse::from(deleted)))
}
