//! Repository layer for database operations.
//!
//! Services talk to the [`TradieStore`] trait; [`TradieRepository`] is the
//! MongoDB implementation. The query builders in [`tradie_query`] are pure and
//! can be asserted on without a database.

pub mod tradie_query;
pub mod tradie_repository;
pub mod tradie_store;

pub use tradie_repository::TradieRepository;
pub use tradie_store::TradieStore;
