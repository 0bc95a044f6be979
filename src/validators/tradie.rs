//! Tradie listing validators.

use validator::ValidationError;

use crate::constants::ERR_RATE_RANGE;
use crate::models::TradieListQuery;

/// Reject a rate window whose lower bound exceeds its upper bound.
pub fn validate_rate_range(query: &TradieListQuery) -> Result<(), ValidationError> {
    match (query.min_rate, query.max_rate) {
        (Some(min), Some(max)) if min > max => {
            let mut error = ValidationError::new("rate_range");
            error.message = Some(ERR_RATE_RANGE.into());
            Err(error)
        }
        _ => Ok(()),
    }
}

/// Boolean query flag: `1`, `true`, `on` and `yes` (any case) are true.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}
