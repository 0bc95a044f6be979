//! Error message constants used throughout the application.

// Authentication errors
pub const ERR_AUTH_REQUIRED: &str = "Authentication required";
pub const ERR_INVALID_AUTH_HEADER: &str = "Missing or invalid authorization header";
pub const ERR_INVALID_TOKEN: &str = "Invalid or expired token";

// Authorization errors
pub const ERR_HOMEOWNERS_ONLY: &str = "Only homeowners can browse tradies";

// Tradie errors
pub const ERR_TRADIE_NOT_FOUND: &str = "Tradie not found";
pub const ERR_INVALID_SERVICE_ID: &str = "Invalid service ID format";

// Validation errors
pub const ERR_INVALID_QUERY: &str = "Invalid query parameters";
pub const ERR_RATE_RANGE: &str = "min_rate must not be greater than max_rate";
pub const ERR_INTERNAL: &str = "Internal server error";
