//! Geo-search constants.

/// Search radius applied when a location is given without `radius`.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 50.0;

pub const METERS_PER_KM: f64 = 1000.0;
