use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Service (trade category) document stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Service {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
