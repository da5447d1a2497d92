use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::time::timestamp;

/// Link between a booking and one of its passengers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPassenger {
    pub booking_id: String,
    pub passenger_id: Uuid,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl BookingPassenger {
    pub fn is(&self, booking_id: &str, passenger_id: Uuid) -> bool {
        self.booking_id == booking_id && self.passenger_id == passenger_id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookingPassengerRequest {
    pub booking_id: String,
    pub passenger_id: Uuid,
}

pub type UpdateBookingPassengerRequest = AddBookingPassengerRequest;
