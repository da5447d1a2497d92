use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::time::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: i64,
    pub class_flight_id: i64,
    pub passenger_id: Option<Uuid>,
    pub seat_code: String,
    pub is_booked: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSeatRequest {
    pub class_flight_id: i64,
    pub seat_code: String,
}

/// Assigns (`Some`) or releases (`None`) the seat's occupant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSeatRequest {
    pub id: i64,
    pub passenger_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_flight_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_id: Option<String>,
}
