use actix_web::{error::QueryPayloadError, web, HttpRequest, HttpResponse};
use log::warn;
use utoipa::OpenApi;

use crate::constants::{CODE_INVALID_QUERY, ERR_INVALID_QUERY, MSG_SERVER_RUNNING};
use crate::errors::ApiError;
use crate::handlers;
use crate::middleware::AuthMiddleware;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api-docs/openapi.json", web::get().to(openapi_json))
        .service(
            web::scope("/api")
                // Health check
                .route("/health", web::get().to(health_check))
                // Homeowner routes (protected)
                .service(
                    web::scope("/homeowner")
                        .wrap(AuthMiddleware)
                        // List tradies with filters, search, and pagination
                        .route("/tradies", web::get().to(handlers::list_tradies))
                        // Get a single active tradie by ID
                        .route("/tradies/{id}", web::get().to(handlers::get_tradie)),
                ),
        );
}

/// Render malformed query strings in the API's JSON error shape.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, req: &HttpRequest| {
        warn!("Rejected query for {}: {}", req.path(), err);
        ApiError::bad_request(CODE_INVALID_QUERY, format!("{}: {}", ERR_INVALID_QUERY, err))
            .into()
    })
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
