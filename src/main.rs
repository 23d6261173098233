use std::sync::Arc;
use std::time::Instant;

use actix_web::dev::Service as _;
use actix_web::{middleware::Logger, web, App, HttpServer};
use catalog_backend::api::{openapi, routes};
use catalog_backend::application::{CategoryService, ProductService};
use catalog_backend::config::AppConfig;
use catalog_backend::infrastructure::db::{migrations::run_migrations, pool::create_pool};
use catalog_backend::infrastructure::repositories::{
    CategoryRepositoryImpl, ProductRepositoryImpl,
};
use catalog_backend::security::{cors_middleware, security_headers};
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().expect("failed to load application configuration");

    let fmt_layer = if config.logging.json_format {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed()
    } else {
        fmt::layer().boxed()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::new(config.logging.level.clone()))
        .with(fmt_layer)
        .init();

    let pool = create_pool(&config.database)
        .await
        .expect("failed to create database pool");

    run_migrations(&pool)
        .await
        .expect("database migrations failed");

    let category_repo = Arc::new(CategoryRepositoryImpl::new(pool.clone()));
    let product_repo = Arc::new(ProductRepositoryImpl::new(pool.clone()));

    let category_service = Arc::new(CategoryService::new(category_repo));
    let state = routes::AppState {
        product_service: Arc::new(ProductService::new(product_repo, category_service.clone())),
        category_service,
        db_pool: Some(pool),
    };

    let bind_host = config.host.clone();
    let bind_port = config.port;
    let security_config = config.security.clone();

    info!(
        host = %bind_host,
        port = bind_port,
        environment = %config.environment,
        "starting catalog backend"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap_fn(move |req, srv| {
                let request_id = Uuid::new_v4().to_string();
                let path = req.path().to_string();
                let method = req.method().to_string();
                let start = Instant::now();

                let fut = srv.call(req);
                async move {
                    match fut.await {
                        Ok(mut response) => {
                            response.headers_mut().insert(
                                actix_web::http::header::HeaderName::from_static("x-request-id"),
                                actix_web::http::header::HeaderValue::from_str(&request_id)
                                    .unwrap_or_else(|_| {
                                        actix_web::http::header::HeaderValue::from_static(
                                            "invalid-request-id",
                                        )
                                    }),
                            );

                            info!(
                                request_id = %request_id,
                                method = %method,
                                path = %path,
                                status = response.status().as_u16(),
                                latency_ms = start.elapsed().as_millis() as u64,
                                "request completed"
                            );

                            Ok(response)
                        }
                        Err(error) => Err(error),
                    }
                }
            })
            .wrap(cors_middleware(&security_config))
            .wrap(security_headers())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
            .configure(openapi::configure_swagger_ui)
    })
    .bind((bind_host, bind_port))?
    .run()
    .await
}
