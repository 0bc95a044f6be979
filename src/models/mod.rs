//! Data models organized by type.

pub mod claims;
pub mod filter;
pub mod requests;
pub mod responses;
pub mod service;
pub mod tradie;

pub use claims::*;
pub use filter::*;
pub use requests::*;
pub use responses::*;
pub use service::*;
pub use tradie::*;
