//! Services organized by domain concern.

pub mod tradie_service;

pub use tradie_service::TradieService;
