//! Request models for API endpoints.

pub mod tradie;

pub use tradie::*;
