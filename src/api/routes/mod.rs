use std::sync::Arc;

use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::application::{CategoryService, ProductService};
use crate::error::{AppError, AppResult};

pub mod categories;
pub mod products;
pub mod subcategories;

#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub product_service: Arc<ProductService>,
    pub db_pool: Option<PgPool>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(categories::configure)
            .configure(subcategories::configure)
            .configure(products::configure),
    )
    .route("/health", web::get().to(health))
    .route("/ready", web::get().to(ready));
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check passed")
    ),
    tag = "health"
)]
pub async fn health() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Readiness check passed"),
        (status = 503, description = "Service not ready"),
    ),
    tag = "health"
)]
pub async fn ready(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    if let Some(pool) = &state.db_pool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(pool)
            .await
            .map_err(|e| AppError::ServiceUnavailable {
                service: "database".to_string(),
                message: format!("Service not ready: {e}"),
            })?;
    }
    Ok(HttpResponse::Ok().body("ready"))
}
