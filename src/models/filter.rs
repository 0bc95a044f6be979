//! Typed tradie filter built from a validated list query.

use mongodb::bson::oid::ObjectId;

use crate::constants::{CODE_INVALID_SERVICE_ID, DEFAULT_SEARCH_RADIUS_KM, ERR_INVALID_SERVICE_ID};
use crate::errors::ApiError;
use crate::models::{AvailabilityStatus, TradieListQuery, TradieStatus};

/// How a location filter bounds the distance to the search point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationMode {
    /// Within a fixed radius in kilometres.
    Radius(f64),
    /// Within each tradie's own `service_radius`.
    ServiceRadius,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFilter {
    pub latitude: f64,
    pub longitude: f64,
    pub mode: LocationMode,
}

/// Conjunction of predicates applied to the tradies collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TradieFilter {
    pub status: TradieStatus,
    pub availability: Option<AvailabilityStatus>,
    pub service_id: Option<ObjectId>,
    pub region: Option<String>,
    pub location: Option<LocationFilter>,
    pub min_rate: Option<f64>,
    pub max_rate: Option<f64>,
    pub min_experience: Option<u32>,
    pub search: Option<String>,
}

impl TradieFilter {
    pub fn from_query(query: &TradieListQuery) -> Result<Self, ApiError> {
        let service_id = query
            .service_id
            .as_deref()
            .map(|raw| {
                ObjectId::parse_str(raw.trim()).map_err(|_| {
                    ApiError::bad_request(CODE_INVALID_SERVICE_ID, ERR_INVALID_SERVICE_ID)
                })
            })
            .transpose()?;

        // Both coordinates are required; one alone is ignored
        let location = match (query.latitude, query.longitude) {
            (Some(latitude), Some(longitude)) => Some(LocationFilter {
                latitude,
                longitude,
                mode: if query.uses_service_radius() {
                    LocationMode::ServiceRadius
                } else {
                    LocationMode::Radius(query.radius.unwrap_or(DEFAULT_SEARCH_RADIUS_KM))
                },
            }),
            _ => None,
        };

        Ok(Self {
            status: query.status.unwrap_or_default(),
            availability: query.availability_status,
            service_id,
            region: non_blank(query.region.as_deref()),
            location,
            min_rate: query.min_rate,
            max_rate: query.max_rate,
            min_experience: query.min_experience,
            search: non_blank(query.search.as_deref()),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
