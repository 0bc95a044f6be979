//! HTTP request handlers organized by domain.

pub mod tradie_handler;

pub use tradie_handler::*;
