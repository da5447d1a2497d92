use serde::Serialize;

use crate::client::ApiClient;
use crate::entities::ApiResponse;
use crate::entities::booking::{AddBookingRequest, Booking, UpdateBookingRequest};
use crate::error::AppResult;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ByFlight<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    flight_id: Option<&'a str>,
}

#[derive(Clone)]
pub struct BookingService {
    api: ApiClient,
}

impl BookingService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all_bookings(&self, flight_id: Option<&str>) -> AppResult<ApiResponse<Vec<Booking>>> {
        let query = ByFlight {
            flight_id: flight_id.filter(|id| !id.is_empty()),
        };
        self.api.get_list_with(&["booking"], &query).await
    }

    pub async fn get_booking(&self, id: &str) -> AppResult<ApiResponse<Booking>> {
        self.api.get(&["booking", id]).await
    }

    pub async fn create_booking(&self, request: &AddBookingRequest) -> AppResult<ApiResponse<Booking>> {
        self.api.post(&["booking", "create"], request).await
    }

    pub async fn update_booking(&self, request: &UpdateBookingRequest) -> AppResult<ApiResponse<Booking>> {
        self.api.put(&["booking", "update"], request).await
    }

    /// Cancels (soft deletes) the booking.
    pub async fn cancel_booking(&self, id: &str) -> AppResult<ApiResponse<Booking>> {
        self.api.post_empty(&["booking", "delete", id]).await
    }
}
