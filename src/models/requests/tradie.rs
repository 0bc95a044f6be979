//! Tradie-related request models.

use serde::Deserialize;
use validator::Validate;

use crate::models::{AvailabilityStatus, TradieStatus};
use crate::validators::{is_truthy, validate_rate_range};

/// Query parameters for listing tradies with pagination, filters, and search
#[derive(Debug, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_rate_range"))]
pub struct TradieListQuery {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100, message = "per_page must be between 1 and 100"))]
    pub per_page: Option<u64>,
    /// Account status to list (default: active)
    pub status: Option<TradieStatus>,
    pub availability_status: Option<AvailabilityStatus>,
    /// Only tradies offering this service
    pub service_id: Option<String>,
    pub region: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be between -180 and 180"
    ))]
    pub longitude: Option<f64>,
    /// Search radius in kilometres (default: 50)
    #[validate(range(
        exclusive_min = 0.0,
        max = 20000.0,
        message = "radius must be greater than 0 and at most 20000"
    ))]
    pub radius: Option<f64>,
    /// Match against each tradie's own service radius instead of `radius`
    pub use_service_radius: Option<String>,
    #[validate(range(min = 0.0, message = "min_rate must not be negative"))]
    pub min_rate: Option<f64>,
    #[validate(range(min = 0.0, message = "max_rate must not be negative"))]
    pub max_rate: Option<f64>,
    pub min_experience: Option<u32>,
    /// Search query matched against first name, last name, or business name
    pub search: Option<String>,
}

impl TradieListQuery {
    pub fn uses_service_radius(&self) -> bool {
        self.use_service_radius.as_deref().is_some_and(is_truthy)
    }
}
