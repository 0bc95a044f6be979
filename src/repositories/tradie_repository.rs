//! Tradie repository for all MongoDB operations related to tradies.
//!
//! This repository encapsulates all database access logic for the tradies
//! collection, providing the [`TradieStore`] interface for the service layer.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, from_document, oid::ObjectId, Document};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_TRADIES;
use crate::errors::ApiError;
use crate::models::{Tradie, TradieFilter, TradieStatus};
use crate::repositories::tradie_query::{by_id_pipeline, count_pipeline, page_pipeline, read_total};
use crate::repositories::TradieStore;

/// MongoDB-backed tradie store.
pub struct TradieRepository {
    collection: Collection<Tradie>,
}

impl TradieRepository {
    /// Create a new TradieRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_TRADIES),
        }
    }

    async fn aggregate(&self, pipeline: Vec<Document>) -> Result<Vec<Document>, ApiError> {
        debug!("Repository: Running tradie pipeline: {:?}", pipeline);
        let cursor = self.collection.aggregate(pipeline).await?;
        Ok(cursor.try_collect().await?)
    }
}

fn decode_all(documents: Vec<Document>) -> Result<Vec<Tradie>, ApiError> {
    documents
        .into_iter()
        .map(|document| from_document::<Tradie>(document).map_err(ApiError::from))
        .collect()
}

#[async_trait]
impl TradieStore for TradieRepository {
    async fn find_page(
        &self,
        filter: &TradieFilter,
        skip: u64,
        limit: u64,
    ) -> Result<(Vec<Tradie>, u64), ApiError> {
        let total = self
            .aggregate(count_pipeline(filter))
            .await?
            .first()
            .map(read_total)
            .unwrap_or(0);

        if total <= skip {
            return Ok((Vec::new(), total));
        }

        let tradies = decode_all(self.aggregate(page_pipeline(filter, skip, limit)).await?)?;
        Ok((tradies, total))
    }

    async fn find_by_id_with_status(
        &self,
        id: ObjectId,
        status: TradieStatus,
    ) -> Result<Option<Tradie>, ApiError> {
        debug!("Repository: Finding {} tradie by ID: {}", status, id);
        let tradie = decode_all(self.aggregate(by_id_pipeline(id, status)).await?)?
            .into_iter()
            .next();
        Ok(tradie)
    }

    /// Create the indexes the list and lookup queries rely on.
    ///
    /// - `2dsphere` index on `location` (required by `$geoNear`)
    /// - Compound index on `status` and `availability_status`
    /// - Multikey index on `service_ids`
    async fn ensure_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for tradies collection...");

        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "location": "2dsphere" })
                .build(),
            IndexModel::builder()
                .keys(doc! { "status": 1, "availability_status": 1 })
                .build(),
            IndexModel::builder()
                .keys(doc! { "service_ids": 1 })
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        info!("Database indexes created successfully");
        Ok(())
    }
}
