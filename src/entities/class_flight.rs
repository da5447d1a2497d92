use serde::{Deserialize, Serialize};

use crate::entities::seat::Seat;

/// A priced seating tier on a flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassFlight {
    pub id: i64,
    pub flight_id: String,
    /// `Economy`, `Business`, `First`, or whatever the backend adds later.
    pub class_type: String,
    pub seat_capacity: i32,
    pub available_seats: i32,
    pub price: f64,
    /// Present on detail responses only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<Vec<Seat>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddClassFlightForCreate {
    pub class_type: String,
    pub seat_capacity: i32,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassFlightRequest {
    pub flight_id: String,
    pub class_type: String,
    pub seat_capacity: i32,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassFlightRequest {
    pub id: i64,
    pub seat_capacity: i32,
    pub price: f64,
}
