//! Application constants module.
//!
//! This module centralizes the constant strings and numbers used throughout the
//! application: error messages and codes, success messages, roles, collection
//! names, pagination and geo-search defaults.

pub mod collections;
pub mod error_codes;
pub mod errors;
pub mod geo;
pub mod messages;
pub mod pagination;
pub mod roles;

pub use collections::*;
pub use error_codes::*;
pub use errors::*;
pub use geo::*;
pub use messages::*;
pub use pagination::*;
pub use roles::*;
