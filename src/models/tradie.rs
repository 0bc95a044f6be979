use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::models::Service;

/// Account status of a tradie
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TradieStatus {
    #[default]
    Active,
    Inactive,
    Pending,
    Suspended,
}

impl TradieStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradieStatus::Active => "active",
            TradieStatus::Inactive => "inactive",
            TradieStatus::Pending => "pending",
            TradieStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for TradieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a tradie is currently taking on work
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    #[default]
    Available,
    Busy,
    Unavailable,
}

impl AvailabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "available",
            AvailabilityStatus::Busy => "busy",
            AvailabilityStatus::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// GeoJSON point. Coordinates are `[longitude, latitude]`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [longitude, latitude],
        }
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn to_document(&self) -> Document {
        doc! { "type": &self.kind, "coordinates": [self.longitude(), self.latitude()] }
    }
}

/// Tradie document stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Tradie {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<u32>,
    #[serde(default)]
    pub availability_status: AvailabilityStatus,
    #[serde(default)]
    pub status: TradieStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    /// Distance in kilometres the tradie is willing to travel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_radius: Option<f64>,
    #[serde(default)]
    pub service_ids: Vec<ObjectId>,
    pub created_at: mongodb::bson::DateTime,
    pub updated_at: mongodb::bson::DateTime,

    // Populated by aggregation only
    #[serde(default, skip_serializing)]
    pub services: Vec<Service>,
    /// Kilometres from the search point when a location filter applied.
    #[serde(default, skip_serializing)]
    pub distance: Option<f64>,
}
