use uuid::Uuid;

use crate::client::ApiClient;
use crate::entities::ApiResponse;
use crate::entities::booking_passenger::{
    AddBookingPassengerRequest, BookingPassenger, UpdateBookingPassengerRequest,
};
use crate::error::AppResult;

#[derive(Clone)]
pub struct BookingPassengerService {
    api: ApiClient,
}

impl BookingPassengerService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all_booking_passengers(&self) -> AppResult<ApiResponse<Vec<BookingPassenger>>> {
        self.api.get_list(&["booking-passenger"]).await
    }

    pub async fn get_booking_passenger(
        &self,
        booking_id: &str,
        passenger_id: Uuid,
    ) -> AppResult<ApiResponse<BookingPassenger>> {
        self.api
            .get(&["booking-passenger", booking_id, &passenger_id.to_string()])
            .await
    }

    pub async fn create_booking_passenger(
        &self,
        request: &AddBookingPassengerRequest,
    ) -> AppResult<ApiResponse<BookingPassenger>> {
        self.api.post(&["booking-passenger", "create"], request).await
    }

    pub async fn update_booking_passenger(
        &self,
        request: &UpdateBookingPassengerRequest,
    ) -> AppResult<ApiResponse<BookingPassenger>> {
        self.api.put(&["booking-passenger", "update"], request).await
    }

    pub async fn delete_booking_passenger(
        &self,
        booking_id: &str,
        passenger_id: Uuid,
    ) -> AppResult<ApiResponse<BookingPassenger>> {
        self.api
            .post_empty(&[
                "booking-passenger",
                "delete",
                booking_id,
                &passenger_id.to_string(),
            ])
            .await
    }
}
