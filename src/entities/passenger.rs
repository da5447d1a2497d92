use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::time::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub id: Uuid,
    pub full_name: String,
    pub birth_date: NaiveDate,
    /// 1 male, 2 female, 3 other.
    pub gender: i32,
    pub id_passport: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

pub fn gender_text(gender: i32) -> &'static str {
    match gender {
        1 => "Male",
        2 => "Female",
        3 => "Other",
        _ => "Unknown",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPassengerRequest {
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub gender: i32,
    pub id_passport: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePassengerRequest {
    pub id: Uuid,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub gender: i32,
    pub id_passport: String,
}
