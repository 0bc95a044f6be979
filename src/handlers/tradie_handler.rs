//! Homeowner-facing tradie handlers: filtered listing and single lookup.

use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, info, warn};
use validator::Validate;

use crate::constants::{ERR_HOMEOWNERS_ONLY, ROLE_HOMEOWNER};
use crate::errors::ApiError;
use crate::middleware::{require_auth, require_role};
use crate::models::{ApiResponse, TradieListQuery};
use crate::services::TradieService;
use crate::validators::validation_errors_to_api_error;

/// List tradies with filters and pagination
#[utoipa::path(
    get,
    path = "/api/homeowner/tradies",
    tag = "Tradies",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 15, max: 100)"),
        ("status" = Option<crate::models::TradieStatus>, Query, description = "Account status (default: active)"),
        ("availability_status" = Option<crate::models::AvailabilityStatus>, Query, description = "Filter by availability"),
        ("service_id" = Option<String>, Query, description = "Only tradies offering this service"),
        ("region" = Option<String>, Query, description = "Filter by region (case-insensitive)"),
        ("latitude" = Option<f64>, Query, description = "Search point latitude; requires longitude"),
        ("longitude" = Option<f64>, Query, description = "Search point longitude; requires latitude"),
        ("radius" = Option<f64>, Query, description = "Search radius in km (default: 50)"),
        ("use_service_radius" = Option<bool>, Query, description = "Match each tradie's own service radius instead of radius"),
        ("min_rate" = Option<f64>, Query, description = "Minimum hourly rate (inclusive)"),
        ("max_rate" = Option<f64>, Query, description = "Maximum hourly rate (inclusive)"),
        ("min_experience" = Option<u32>, Query, description = "Minimum years of experience"),
        ("search" = Option<String>, Query, description = "Search by first name, last name, or business name")
    ),
    responses(
        (status = 200, description = "Page of tradies, wrapped in `data`", body = crate::models::PaginatedTradies),
        (status = 400, description = "Invalid query parameters", body = crate::errors::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse),
        (status = 403, description = "Not a homeowner", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_tradies(
    tradie_service: web::Data<TradieService>,
    query: web::Query<TradieListQuery>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    require_role(&claims, ROLE_HOMEOWNER, ERR_HOMEOWNERS_ONLY)?;

    debug!("Listing tradies for {}: {:?}", claims.sub, query);
    query.validate().map_err(|e| {
        let mut fields: Vec<_> = e.field_errors().into_keys().collect();
        fields.sort();
        warn!("Rejected tradie query from {}: invalid {:?}", claims.sub, fields);
        validation_errors_to_api_error(e)
    })?;

    let page = tradie_service.list_tradies(&query).await?;

    info!(
        "Returned {} tradies (total {}) to {}",
        page.data.len(),
        page.total,
        claims.sub
    );
    Ok(HttpResponse::Ok().json(ApiResponse::data(page)))
}

/// Get a single active tradie by ID
#[utoipa::path(
    get,
    path = "/api/homeowner/tradies/{id}",
    tag = "Tradies",
    params(
        ("id" = String, Path, description = "Tradie ID")
    ),
    responses(
        (status = 200, description = "Tradie found, wrapped in `data`", body = crate::models::TradieResponse),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse),
        (status = 403, description = "Not a homeowner", body = crate::errors::ErrorResponse),
        (status = 404, description = "Tradie not found", body = crate::errors::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_tradie(
    tradie_service: web::Data<TradieService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let claims = require_auth(&req)?;
    require_role(&claims, ROLE_HOMEOWNER, ERR_HOMEOWNERS_ONLY)?;

    let tradie_id = path.into_inner();
    let tradie = tradie_service.get_tradie(&tradie_id).await?;

    info!("Successfully fetched tradie: {}", tradie_id);
    Ok(HttpResponse::Ok().json(ApiResponse::data(tradie)))
}
