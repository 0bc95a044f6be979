//! MongoDB collection names.

pub const COLLECTION_TRADIES: &str = "tradies";
pub const COLLECTION_SERVICES: &str = "services";
