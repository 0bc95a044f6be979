use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::errors::ErrorResponse;
use crate::models::{
    AvailabilityStatus, HealthResponse, PaginatedTradies, ServiceResponse, TradieResponse,
    TradieStatus,
};

/// OpenAPI documentation for the Tradie Directory API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tradie Directory API",
        version = "0.1.0",
        description = "REST API for homeowners to browse, filter, and look up tradies.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Tradies", description = "Homeowner-facing tradie listing and lookup")
    ),
    paths(
        crate::handlers::list_tradies,
        crate::handlers::get_tradie,
        crate::routes::health_check
    ),
    components(
        schemas(
            TradieStatus,
            AvailabilityStatus,
            TradieResponse,
            ServiceResponse,
            PaginatedTradies,
            ErrorResponse,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for Bearer token authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT issued by the marketplace auth service"))
                        .build(),
                ),
            );
        }
    }
}
