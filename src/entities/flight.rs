use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::class_flight::{AddClassFlightForCreate, ClassFlight, UpdateClassFlightRequest};
use crate::utils::time::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightStatus {
    Scheduled = 1,
    InFlight = 2,
    Finished = 3,
    Delayed = 4,
    Cancelled = 5,
}

impl FlightStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(FlightStatus::Scheduled),
            2 => Some(FlightStatus::InFlight),
            3 => Some(FlightStatus::Finished),
            4 => Some(FlightStatus::Delayed),
            5 => Some(FlightStatus::Cancelled),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::InFlight => "In Flight",
            FlightStatus::Finished => "Finished",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Cancelled => "Cancelled",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "badge-scheduled",
            FlightStatus::InFlight => "badge-inflight",
            FlightStatus::Finished => "badge-finished",
            FlightStatus::Delayed => "badge-delayed",
            FlightStatus::Cancelled => "badge-cancelled",
        }
    }
}

pub fn status_text(code: i32) -> &'static str {
    FlightStatus::from_code(code).map_or("Unknown", FlightStatus::label)
}

pub fn status_badge_class(code: i32) -> &'static str {
    FlightStatus::from_code(code).map_or("badge-unknown", FlightStatus::badge_class)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub airline_id: String,
    pub airplane_id: String,
    pub origin_airport_code: String,
    pub destination_airport_code: String,
    #[serde(with = "timestamp")]
    pub departure_time: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub arrival_time: DateTime<Utc>,
    pub terminal: String,
    pub gate: String,
    pub baggage_allowance: i32,
    pub facilities: Option<String>,
    /// Raw status code; see [`FlightStatus`].
    pub status: i32,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
    #[serde(default)]
    pub classes: Vec<ClassFlight>,
}

impl Flight {
    pub fn status(&self) -> Option<FlightStatus> {
        FlightStatus::from_code(self.status)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFlightRequest {
    pub airline_id: String,
    pub airplane_id: String,
    pub origin_airport_code: String,
    pub destination_airport_code: String,
    #[serde(with = "timestamp")]
    pub departure_time: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub arrival_time: DateTime<Utc>,
    pub terminal: String,
    pub gate: String,
    pub baggage_allowance: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facilities: Option<String>,
    pub classes: Vec<AddClassFlightForCreate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlightRequest {
    pub id: String,
    #[serde(with = "timestamp")]
    pub departure_time: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub arrival_time: DateTime<Utc>,
    pub terminal: String,
    pub gate: String,
    pub baggage_allowance: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facilities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<UpdateClassFlightRequest>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_airport_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_airport_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_deleted: Option<bool>,
}

impl FlightListParams {
    /// Fields set on `other` win over fields set on `self`.
    pub fn merged_with(&self, other: &FlightListParams) -> FlightListParams {
        FlightListParams {
            origin_airport_code: other
                .origin_airport_code
                .clone()
                .or_else(|| self.origin_airport_code.clone()),
            destination_airport_code: other
                .destination_airport_code
                .clone()
                .or_else(|| self.destination_airport_code.clone()),
            airline_id: other.airline_id.clone().or_else(|| self.airline_id.clone()),
            status: other.status.or(self.status),
            include_deleted: other.include_deleted.or(self.include_deleted),
        }
    }

    /// Strip empty strings so they are not sent as `?airlineId=`.
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.origin_airport_code,
            &mut self.destination_airport_code,
            &mut self.airline_id,
        ] {
            if field.as_deref().is_some_and(|v| v.is_empty()) {
                *field = None;
            }
        }
        self
    }
}
