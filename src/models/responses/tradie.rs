//! Tradie-related response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{AvailabilityStatus, Service, Tradie, TradieStatus};

/// Service offered by a tradie
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ServiceResponse {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Plumbing")]
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        Self {
            id: service.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: service.name,
            category: service.category,
            description: service.description,
        }
    }
}

/// Tradie data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct TradieResponse {
    /// Tradie's unique identifier
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f7")]
    pub id: String,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Smith")]
    pub last_name: String,
    pub middle_name: Option<String>,
    #[schema(example = "john@example.com")]
    pub email: String,
    pub phone: Option<String>,
    #[schema(example = "ABC Plumbing")]
    pub business_name: Option<String>,
    pub bio: Option<String>,
    pub license_number: Option<String>,
    #[schema(example = 85.0)]
    pub hourly_rate: Option<f64>,
    #[schema(example = 5)]
    pub years_experience: Option<u32>,
    pub availability_status: AvailabilityStatus,
    pub status: TradieStatus,
    #[schema(example = "Auckland")]
    pub region: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Travel radius in kilometres
    pub service_radius: Option<f64>,
    pub services: Vec<ServiceResponse>,
    /// Kilometres from the search point, only present for location searches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Tradie> for TradieResponse {
    fn from(tradie: Tradie) -> Self {
        Self {
            id: tradie.id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name: tradie.first_name,
            last_name: tradie.last_name,
            middle_name: tradie.middle_name,
            email: tradie.email,
            phone: tradie.phone,
            business_name: tradie.business_name,
            bio: tradie.bio,
            license_number: tradie.license_number,
            hourly_rate: tradie.hourly_rate,
            years_experience: tradie.years_experience,
            availability_status: tradie.availability_status,
            status: tradie.status,
            region: tradie.region,
            latitude: tradie.location.as_ref().map(|p| p.latitude()),
            longitude: tradie.location.as_ref().map(|p| p.longitude()),
            service_radius: tradie.service_radius,
            services: tradie.services.into_iter().map(Into::into).collect(),
            distance: tradie.distance,
            created_at: DateTime::from_timestamp_millis(tradie.created_at.timestamp_millis())
                .unwrap_or_default(),
            updated_at: DateTime::from_timestamp_millis(tradie.updated_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_flattens_location_and_services() {
        let now = mongodb::bson::DateTime::now();
        let tradie = Tradie {
            id: Some(ObjectId::new()),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            middle_name: None,
            email: "john@example.com".to_string(),
            phone: None,
            business_name: Some("ABC Plumbing".to_string()),
            bio: None,
            license_number: None,
            hourly_rate: Some(80.0),
            years_experience: Some(5),
            availability_status: AvailabilityStatus::Available,
            status: TradieStatus::Active,
            region: Some("Auckland".to_string()),
            location: Some(GeoPoint::new(-36.85, 174.76)),
            service_radius: Some(25.0),
            service_ids: vec![],
            created_at: now,
            updated_at: now,
            services: vec![Service {
                id: Some(ObjectId::new()),
                name: "Plumbing".to_string(),
                category: None,
                description: None,
            }],
            distance: None,
        };

        let response = TradieResponse::from(tradie);
        assert_eq!(response.latitude, Some(-36.85));
        assert_eq!(response.longitude, Some(174.76));
        assert_eq!(response.services[0].name, "Plumbing");
        assert_eq!(response.id.len(), 24);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("distance").is_none());
        assert_eq!(json["availability_status"], "available");
        assert_eq!(json["business_name"], "ABC Plumbing");
    }
}
