use uuid::Uuid;

use crate::entities::booking_passenger::{
    AddBookingPassengerRequest, BookingPassenger, UpdateBookingPassengerRequest,
};
use crate::entities::ApiResponse;
use crate::error::AppResult;
use crate::services::BookingPassengerService;
use crate::stores::{Snapshot, StoreCell, remove_where, replace_where};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingPassengerState {
    pub booking_passengers: Vec<BookingPassenger>,
    pub current_booking_passenger: Option<BookingPassenger>,
}

#[derive(Clone)]
pub struct BookingPassengerStore {
    service: BookingPassengerService,
    state: StoreCell<BookingPassengerState>,
}

impl BookingPassengerStore {
    pub fn new(service: BookingPassengerService) -> Self {
        Self {
            service,
            state: StoreCell::new(),
        }
    }

    pub async fn snapshot(&self) -> Snapshot<BookingPassengerState> {
        self.state.snapshot().await
    }

    pub async fn fetch_booking_passengers(&self) {
        let _ = self
            .state
            .run(
                "fetch_booking_passengers",
                "Failed to fetch booking passengers",
                async { self.service.get_all_booking_passengers().await.map(ApiResponse::into_data) },
                |state, links| state.booking_passengers = links.clone(),
                |_| {},
            )
            .await;
    }

    pub async fn fetch_booking_passenger(&self, booking_id: &str, passenger_id: Uuid) -> Option<BookingPassenger> {
        self.state
            .run(
                "fetch_booking_passenger",
                "Failed to fetch booking passenger",
                async {
                    self.service
                        .get_booking_passenger(booking_id, passenger_id)
                        .await
                        .map(ApiResponse::into_data)
                },
                |state, link| state.current_booking_passenger = Some(link.clone()),
                |_| {},
            )
            .await
            .ok()
    }

    pub async fn create_booking_passenger(
        &self,
        request: &AddBookingPassengerRequest,
    ) -> AppResult<BookingPassenger> {
        self.state
            .run(
                "create_booking_passenger",
                "Failed to create booking passenger",
                async { self.service.create_booking_passenger(request).await.map(ApiResponse::into_data) },
                |state, created| state.booking_passengers.push(created.clone()),
                |_| {},
            )
            .await
    }

    pub async fn update_booking_passenger(
        &self,
        request: &UpdateBookingPassengerRequest,
    ) -> AppResult<BookingPassenger> {
        let (booking_id, passenger_id) = (request.booking_id.as_str(), request.passenger_id);
        self.state
            .run(
                "update_booking_passenger",
                "Failed to update booking passenger",
                async { self.service.update_booking_passenger(request).await.map(ApiResponse::into_data) },
                |state, updated| {
                    replace_where(&mut state.booking_passengers, updated, |bp| {
                        bp.is(booking_id, passenger_id)
                    });
                    if state
                        .current_booking_passenger
                        .as_ref()
                        .is_some_and(|bp| bp.is(booking_id, passenger_id))
                    {
                        state.current_booking_passenger = Some(updated.clone());
                    }
                },
                |_| {},
            )
            .await
    }

    pub async fn delete_booking_passenger(
        &self,
        booking_id: &str,
        passenger_id: Uuid,
    ) -> AppResult<BookingPassenger> {
        self.state
            .run(
                "delete_booking_passenger",
                "Failed to delete booking passenger",
                async {
                    self.service
                        .delete_booking_passenger(booking_id, passenger_id)
                        .await
                        .map(ApiResponse::into_data)
                },
                |state, _| {
                    remove_where(&mut state.booking_passengers, |bp| bp.is(booking_id, passenger_id));
                },
                |_| {},
            )
            .await
    }

    pub async fn by_booking(&self, booking_id: &str) -> Vec<BookingPassenger> {
        self.state
            .read(|state| {
                state
                    .booking_passengers
                    .iter()
                    .filter(|bp| bp.booking_id == booking_id)
                    .cloned()
                    .collect()
            })
            .await
    }

    pub async fn by_passenger(&self, passenger_id: Uuid) -> Vec<BookingPassenger> {
        self.state
            .read(|state| {
                state
                    .booking_passengers
                    .iter()
                    .filter(|bp| bp.passenger_id == passenger_id)
                    .cloned()
                    .collect()
            })
            .await
    }

    pub async fn clear_error(&self) {
        self.state.update(|s| s.error = None).await;
    }
}
