use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::errors::ApiError;
use crate::models::{Tradie, TradieFilter, TradieStatus};

/// Storage abstraction so the service layer can be exercised without MongoDB.
///
/// Returned tradies carry their joined `services`, and `distance` when the
/// filter had a location.
#[async_trait]
pub trait TradieStore: Send + Sync {
    /// One page of matching tradies plus the total match count.
    async fn find_page(
        &self,
        filter: &TradieFilter,
        skip: u64,
        limit: u64,
    ) -> Result<(Vec<Tradie>, u64), ApiError>;

    async fn find_by_id_with_status(
        &self,
        id: ObjectId,
        status: TradieStatus,
    ) -> Result<Option<Tradie>, ApiError>;

    async fn ensure_indexes(&self) -> Result<(), ApiError>;
}
