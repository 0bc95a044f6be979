//! Tradie service: listing with filters and pagination, and single lookups.

use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use std::sync::Arc;

use crate::constants::{
    CODE_TRADIE_NOT_FOUND, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, ERR_TRADIE_NOT_FOUND,
    MAX_PAGE_SIZE,
};
use crate::errors::ApiError;
use crate::models::{Paginated, TradieFilter, TradieListQuery, TradieResponse, TradieStatus};
use crate::repositories::{TradieRepository, TradieStore};

pub struct TradieService {
    store: Arc<dyn TradieStore>,
}

impl TradieService {
    pub fn new(db: &Database) -> Self {
        Self::with_store(Arc::new(TradieRepository::new(db)))
    }

    /// Create a TradieService over any store (for dependency injection).
    pub fn with_store(store: Arc<dyn TradieStore>) -> Self {
        Self { store }
    }

    pub async fn ensure_indexes(&self) -> Result<(), ApiError> {
        self.store.ensure_indexes().await
    }

    /// List tradies matching the query, one page at a time.
    ///
    /// The query is expected to have passed validation already.
    pub async fn list_tradies(
        &self,
        query: &TradieListQuery,
    ) -> Result<Paginated<TradieResponse>, ApiError> {
        let page = query.page.unwrap_or(DEFAULT_PAGE_NUMBER).max(1);
        let per_page = query
            .per_page
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let filter = TradieFilter::from_query(query)?;
        debug!("Fetching tradies with filter: {:?}", filter);

        // Pages beyond u64 range are past the end of any result set
        let skip = (page - 1).saturating_mul(per_page);
        let (tradies, total) = self.store.find_page(&filter, skip, per_page).await?;

        info!(
            "Fetched {} of {} tradies (page {}, per_page {})",
            tradies.len(),
            total,
            page,
            per_page
        );

        Ok(Paginated::new(tradies, total, page, per_page).map(TradieResponse::from))
    }

    /// Fetch a single active tradie with its services.
    pub async fn get_tradie(&self, id: &str) -> Result<TradieResponse, ApiError> {
        debug!("Fetching tradie by ID: {}", id);

        // A malformed id cannot name any tradie
        let not_found = || {
            warn!("Tradie not found with id: {}", id);
            ApiError::not_found(CODE_TRADIE_NOT_FOUND, ERR_TRADIE_NOT_FOUND)
        };

        let object_id = ObjectId::parse_str(id).map_err(|_| not_found())?;

        self.store
            .find_by_id_with_status(object_id, TradieStatus::Active)
            .await?
            .map(TradieResponse::from)
            .ok_or_else(not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{service, tradie, InMemoryTradieStore};

    fn service_with(store: InMemoryTradieStore) -> TradieService {
        TradieService::with_store(Arc::new(store))
    }

    #[actix_web::test]
    async fn test_list_defaults() {
        let mut store = InMemoryTradieStore::default();
        for i in 0..20 {
            store.add(tradie(&format!("Tradie{i}"), "Smith"));
        }
        let page = service_with(store)
            .list_tradies(&TradieListQuery::default())
            .await
            .unwrap();

        assert_eq!(page.per_page, 15);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total, 20);
        assert_eq!(page.data.len(), 15);
        assert_eq!(page.last_page, 2);
    }

    #[actix_web::test]
    async fn test_second_page_continues_in_order() {
        let mut store = InMemoryTradieStore::default();
        for i in 0..12 {
            store.add(tradie(&format!("Tradie{i:02}"), "Smith"));
        }
        let query = TradieListQuery {
            page: Some(2),
            per_page: Some(5),
            ..Default::default()
        };
        let page = service_with(store).list_tradies(&query).await.unwrap();

        let names: Vec<&str> = page.data.iter().map(|t| t.first_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Tradie05", "Tradie06", "Tradie07", "Tradie08", "Tradie09"]
        );
        assert_eq!(page.from, Some(6));
        assert_eq!(page.to, Some(10));
    }

    #[actix_web::test]
    async fn test_huge_page_is_empty_past_the_end() {
        let mut store = InMemoryTradieStore::default();
        for i in 0..3 {
            store.add(tradie(&format!("Tradie{i}"), "Smith"));
        }
        let query = TradieListQuery {
            page: Some(u64::MAX),
            ..Default::default()
        };
        let page = service_with(store).list_tradies(&query).await.unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.last_page, 1);
        assert_eq!(page.current_page, u64::MAX);
        assert_eq!(page.from, None);
    }

    #[actix_web::test]
    async fn test_status_filter_can_list_inactive() {
        let mut store = InMemoryTradieStore::default();
        store.add(tradie("Active", "One"));
        let mut inactive = tradie("Inactive", "One");
        inactive.status = TradieStatus::Inactive;
        store.add(inactive);

        let query = TradieListQuery {
            status: Some(TradieStatus::Inactive),
            ..Default::default()
        };
        let page = service_with(store).list_tradies(&query).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].first_name, "Inactive");
    }

    #[actix_web::test]
    async fn test_get_tradie_joins_services() {
        let mut store = InMemoryTradieStore::default();
        let plumbing = store.add_service(service("Plumbing"));
        let mut john = tradie("John", "Smith");
        john.service_ids = vec![plumbing];
        let id = store.add(john);

        let found = service_with(store).get_tradie(&id.to_hex()).await.unwrap();
        assert_eq!(found.id, id.to_hex());
        assert_eq!(found.services.len(), 1);
        assert_eq!(found.services[0].name, "Plumbing");
    }

    #[actix_web::test]
    async fn test_get_tradie_hides_inactive() {
        let mut store = InMemoryTradieStore::default();
        let mut jane = tradie("Jane", "Doe");
        jane.status = TradieStatus::Suspended;
        let id = store.add(jane);

        let err = service_with(store)
            .get_tradie(&id.to_hex())
            .await
            .unwrap_err();
        assert_eq!(err.code(), CODE_TRADIE_NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_get_tradie_malformed_id() {
        let err = service_with(InMemoryTradieStore::default())
            .get_tradie("not-an-id")
            .await
            .unwrap_err();
        assert_eq!(err.code(), CODE_TRADIE_NOT_FOUND);
    }
}
