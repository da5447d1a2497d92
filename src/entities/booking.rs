use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::passenger::{AddPassengerRequest, Passenger, UpdatePassengerRequest};
use crate::utils::time::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub flight_id: String,
    pub class_flight_id: i64,
    pub contact_email: String,
    pub contact_phone: String,
    pub passenger_count: i32,
    /// 1 unpaid, 2 paid, 3 cancelled, 4 rescheduled.
    pub status: i32,
    pub total_price: f64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
    #[serde(default)]
    pub passengers: Vec<Passenger>,
    #[serde(default)]
    pub seat_assignments: Vec<SeatAssignment>,
}

impl Booking {
    pub fn seat_for(&self, passenger_id: Uuid) -> Option<&SeatAssignment> {
        self.seat_assignments
            .iter()
            .find(|a| a.passenger_id == passenger_id)
    }
}

/// Seat held by one passenger of a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatAssignment {
    pub passenger_id: Uuid,
    #[serde(default)]
    pub seat_id: Option<i64>,
    #[serde(default)]
    pub seat_code: Option<String>,
}

pub fn status_text(status: i32) -> &'static str {
    match status {
        1 => "Unpaid",
        2 => "Paid",
        3 => "Cancelled",
        4 => "Rescheduled",
        _ => "Unknown",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookingRequest {
    pub flight_id: String,
    pub class_flight_id: i64,
    pub contact_email: String,
    pub contact_phone: String,
    pub passenger_count: i32,
    pub passengers: Vec<AddPassengerRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub id: String,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passengers: Option<Vec<UpdatePassengerRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatistics {
    pub flight_id: String,
    pub total_bookings: u32,
    pub total_revenue: f64,
    pub period: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(1), "Unpaid");
        assert_eq!(status_text(2), "Paid");
        assert_eq!(status_text(3), "Cancelled");
        assert_eq!(status_text(4), "Rescheduled");
        assert_eq!(status_text(7), "Unknown");
    }

    #[test]
    fn test_booking_without_assignments() {
        let raw = r#"{
            "id": "BK-0001",
            "flightId": "F1",
            "classFlightId": 1,
            "contactEmail": "a@b.id",
            "contactPhone": "0812",
            "passengerCount": 0,
            "status": 1,
            "totalPrice": 0,
            "createdAt": "2025-01-01T00:00:00",
            "updatedAt": "2025-01-01T00:00:00",
            "isDeleted": false
        }"#;
        let booking: Booking = serde_json::from_str(raw).unwrap();
        assert!(booking.passengers.is_empty());
        assert!(booking.seat_assignments.is_empty());
        assert!(booking.seat_for(Uuid::nil()).is_none());
    }
}
