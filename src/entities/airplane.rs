use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airplane {
    pub id: String,
    pub airline_id: String,
    pub model: String,
    pub seat_capacity: i32,
    pub manufacture_year: i32,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAirplaneRequest {
    pub airline_id: String,
    pub model: String,
    pub seat_capacity: i32,
    pub manufacture_year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAirplaneRequest {
    pub id: String,
    pub model: String,
    pub seat_capacity: i32,
    pub manufacture_year: i32,
}

/// Filters for the airplane list; `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirplaneListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture_year: Option<i32>,
}
