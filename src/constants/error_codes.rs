//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const CODE_INVALID_QUERY: &str = "INVALID_QUERY";

// Authentication errors
pub const CODE_AUTH_REQUIRED: &str = "AUTH_REQUIRED";
pub const CODE_INVALID_TOKEN: &str = "INVALID_TOKEN";

// Authorization errors
pub const CODE_FORBIDDEN: &str = "FORBIDDEN";

// Tradie errors
pub const CODE_TRADIE_NOT_FOUND: &str = "TRADIE_NOT_FOUND";
pub const CODE_INVALID_SERVICE_ID: &str = "INVALID_SERVICE_ID";

// Generic errors
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
