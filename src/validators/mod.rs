//! Request validation helpers and custom validators.

pub mod common;
pub mod tradie;

pub use common::*;
pub use tradie::*;
