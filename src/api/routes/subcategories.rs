use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::api::dtos::{CategoryResponse, CreateSubcategoryRequest, SubcategoryListQuery};
use crate::api::routes::AppState;
use crate::application::CreateCategoryInput;
use crate::error::AppResult;
use crate::middleware::principal::AdminPrincipal;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/subcategories")
            .route("", web::post().to(create_subcategory))
            .route("", web::get().to(list_subcategories)),
    );
}

#[utoipa::path(
    post,
    path = "/api/v1/subcategories",
    request_body = CreateSubcategoryRequest,
    responses(
        (status = 201, description = "Subcategory created", body = CategoryResponse),
        (status = 400, description = "Invalid name or description"),
        (status = 404, description = "Parent category does not exist"),
        (status = 409, description = "Name already taken under this parent"),
    ),
    tag = "subcategories"
)]
pub async fn create_subcategory(
    state: web::Data<AppState>,
    principal: AdminPrincipal,
    payload: web::Json<CreateSubcategoryRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;
    let payload = payload.into_inner();

    let subcategory = state
        .category_service
        .create(
            &principal.0,
            CreateCategoryInput {
                name: payload.name,
                description: payload.description,
                parent_id: Some(payload.parent_category_id),
            },
        )
        .await?;

    Ok(HttpResponse::Created().json(CategoryResponse::from(subcategory)))
}

#[utoipa::path(
    get,
    path = "/api/v1/subcategories",
    params(SubcategoryListQuery),
    responses(
        (status = 200, description = "Flat subcategory listing", body = [CategoryResponse])
    ),
    tag = "subcategories"
)]
pub async fn list_subcategories(
    state: web::Data<AppState>,
    _principal: AdminPrincipal,
    query: web::Query<SubcategoryListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let subcategories = state
        .category_service
        .list_subcategories(query.search, query.parent_category_id, query.is_active)
        .await?;

    Ok(HttpResponse::Ok().json(
        subcategories
            .into_iter()
            .map(CategoryResponse::from)
            .collect::<Vec<_>>(),
    ))
}
