//! In-memory store and fixtures shared by unit tests.

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use mongodb::bson::oid::ObjectId;

use crate::config::CONFIG;
use crate::errors::ApiError;
use crate::models::{
    AvailabilityStatus, Claims, LocationMode, Service, Tradie, TradieFilter, TradieStatus,
};
use crate::repositories::TradieStore;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Vec-backed [`TradieStore`] applying the same predicates as the MongoDB pipeline.
#[derive(Default)]
pub struct InMemoryTradieStore {
    tradies: Vec<Tradie>,
    services: Vec<Service>,
}

impl InMemoryTradieStore {
    pub fn add(&mut self, mut tradie: Tradie) -> ObjectId {
        let id = *tradie.id.get_or_insert_with(ObjectId::new);
        self.tradies.push(tradie);
        id
    }

    pub fn add_service(&mut self, mut service: Service) -> ObjectId {
        let id = *service.id.get_or_insert_with(ObjectId::new);
        self.services.push(service);
        id
    }

    fn with_services(&self, mut tradie: Tradie) -> Tradie {
        tradie.services = self
            .services
            .iter()
            .filter(|s| s.id.is_some_and(|id| tradie.service_ids.contains(&id)))
            .cloned()
            .collect();
        tradie
    }

    /// `Some(distance)` when the tradie passes the filter; distance is 0 without a location filter.
    fn evaluate(filter: &TradieFilter, tradie: &Tradie) -> Option<f64> {
        if tradie.status != filter.status {
            return None;
        }
        if filter.availability.is_some_and(|a| a != tradie.availability_status) {
            return None;
        }
        if filter
            .service_id
            .is_some_and(|id| !tradie.service_ids.contains(&id))
        {
            return None;
        }
        if let Some(region) = &filter.region {
            if !tradie
                .region
                .as_deref()
                .is_some_and(|r| r.eq_ignore_ascii_case(region))
            {
                return None;
            }
        }
        if let Some(min) = filter.min_rate {
            if !tradie.hourly_rate.is_some_and(|rate| rate >= min) {
                return None;
            }
        }
        if let Some(max) = filter.max_rate {
            if !tradie.hourly_rate.is_some_and(|rate| rate <= max) {
                return None;
            }
        }
        if let Some(years) = filter.min_experience {
            if !tradie.years_experience.is_some_and(|y| y >= years) {
                return None;
            }
        }
        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            let hit = [
                Some(tradie.first_name.as_str()),
                Some(tradie.last_name.as_str()),
                tradie.business_name.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return None;
            }
        }

        match &filter.location {
            None => Some(0.0),
            Some(location) => {
                let point = tradie.location.as_ref()?;
                let distance = haversine_km(
                    location.latitude,
                    location.longitude,
                    point.latitude(),
                    point.longitude(),
                );
                let bound = match location.mode {
                    LocationMode::Radius(km) => km,
                    LocationMode::ServiceRadius => tradie.service_radius?,
                };
                (distance <= bound).then_some(distance)
            }
        }
    }
}

#[async_trait]
impl TradieStore for InMemoryTradieStore {
    async fn find_page(
        &self,
        filter: &TradieFilter,
        skip: u64,
        limit: u64,
    ) -> Result<(Vec<Tradie>, u64), ApiError> {
        let mut matches: Vec<(f64, &Tradie)> = self
            .tradies
            .iter()
            .filter_map(|t| Self::evaluate(filter, t).map(|d| (d, t)))
            .collect();

        if filter.location.is_some() {
            // Stable sort keeps insertion order for equal distances
            matches.sort_by(|a, b| a.0.total_cmp(&b.0));
        }

        let total = matches.len() as u64;
        let page = matches
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .map(|(distance, tradie)| {
                let mut tradie = self.with_services(tradie.clone());
                tradie.distance = filter.location.map(|_| distance);
                tradie
            })
            .collect();

        Ok((page, total))
    }

    async fn find_by_id_with_status(
        &self,
        id: ObjectId,
        status: TradieStatus,
    ) -> Result<Option<Tradie>, ApiError> {
        Ok(self
            .tradies
            .iter()
            .find(|t| t.id == Some(id) && t.status == status)
            .map(|t| self.with_services(t.clone())))
    }

    async fn ensure_indexes(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Active, available tradie with no optional fields set.
pub fn tradie(first_name: &str, last_name: &str) -> Tradie {
    let now = mongodb::bson::DateTime::now();
    Tradie {
        id: None,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        middle_name: None,
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone: None,
        business_name: None,
        bio: None,
        license_number: None,
        hourly_rate: None,
        years_experience: None,
        availability_status: AvailabilityStatus::Available,
        status: TradieStatus::Active,
        region: None,
        location: None,
        service_radius: None,
        service_ids: Vec::new(),
        created_at: now,
        updated_at: now,
        services: Vec::new(),
        distance: None,
    }
}

pub fn service(name: &str) -> Service {
    Service {
        id: None,
        name: name.to_string(),
        category: None,
        description: None,
    }
}

/// Signed bearer token for the given role, valid for an hour.
pub fn bearer_token(role: &str) -> String {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: ObjectId::new().to_hex(),
        email: format!("{}@example.com", role),
        role: role.to_string(),
        exp: now + 3600,
        iat: now,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
    )
    .expect("failed to sign test token");
    format!("Bearer {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_auckland_to_wellington() {
        let km = haversine_km(-36.8485, 174.7633, -41.2865, 174.7762);
        assert!((km - 493.0).abs() < 5.0, "got {km}");
    }

    #[test]
    fn test_haversine_same_point() {
        assert_eq!(haversine_km(-36.85, 174.76, -36.85, 174.76), 0.0);
    }
}
