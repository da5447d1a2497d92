use uuid::Uuid;

use crate::entities::passenger::{AddPassengerRequest, Passenger, UpdatePassengerRequest, gender_text};
use crate::entities::ApiResponse;
use crate::error::AppResult;
use crate::services::PassengerService;
use crate::stores::{Snapshot, StoreCell, remove_where, replace_where};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassengerState {
    pub passengers: Vec<Passenger>,
    pub current_passenger: Option<Passenger>,
}

#[derive(Clone)]
pub struct PassengerStore {
    service: PassengerService,
    state: StoreCell<PassengerState>,
}

impl PassengerStore {
    pub fn new(service: PassengerService) -> Self {
        Self {
            service,
            state: StoreCell::new(),
        }
    }

    pub async fn snapshot(&self) -> Snapshot<PassengerState> {
        self.state.snapshot().await
    }

    pub async fn fetch_passengers(&self) {
        let _ = self
            .state
            .run(
                "fetch_passengers",
                "Failed to fetch passengers",
                async { self.service.get_all_passengers().await.map(ApiResponse::into_data) },
                |state, passengers| state.passengers = passengers.clone(),
                |_| {},
            )
            .await;
    }

    /// `None` on failure; the message is kept in `error`.
    pub async fn fetch_passenger(&self, id: Uuid) -> Option<Passenger> {
        self.state
            .run(
                "fetch_passenger",
                "Failed to fetch passenger",
                async { self.service.get_passenger(id).await.map(ApiResponse::into_data) },
                |state, passenger| state.current_passenger = Some(passenger.clone()),
                |_| {},
            )
            .await
            .ok()
    }

    pub async fn create_passenger(&self, request: &AddPassengerRequest) -> AppResult<Passenger> {
        self.state
            .run(
                "create_passenger",
                "Failed to create passenger",
                async { self.service.create_passenger(request).await.map(ApiResponse::into_data) },
                |state, created| state.passengers.push(created.clone()),
                |_| {},
            )
            .await
    }

    pub async fn update_passenger(&self, request: &UpdatePassengerRequest) -> AppResult<Passenger> {
        self.state
            .run(
                "update_passenger",
                "Failed to update passenger",
                async { self.service.update_passenger(request).await.map(ApiResponse::into_data) },
                |state, updated| {
                    replace_where(&mut state.passengers, updated, |p| p.id == request.id);
                    if state.current_passenger.as_ref().is_some_and(|p| p.id == request.id) {
                        state.current_passenger = Some(updated.clone());
                    }
                },
                |_| {},
            )
            .await
    }

    /// Passengers are deleted physically.
    pub async fn delete_passenger(&self, id: Uuid) -> AppResult<Passenger> {
        self.state
            .run(
                "delete_passenger",
                "Failed to delete passenger",
                async { self.service.delete_passenger(id).await.map(ApiResponse::into_data) },
                |state, _| {
                    remove_where(&mut state.passengers, |p| p.id == id);
                },
                |_| {},
            )
            .await
    }

    /// Full name for `passenger_id`, or the id itself when unknown.
    pub async fn passenger_name(&self, passenger_id: Uuid) -> String {
        self.state
            .read(|state| {
                state
                    .passengers
                    .iter()
                    .find(|p| p.id == passenger_id)
                    .map(|p| p.full_name.clone())
            })
            .await
            .unwrap_or_else(|| passenger_id.to_string())
    }

    pub fn gender_text(gender: i32) -> &'static str {
        gender_text(gender)
    }

    pub async fn clear_error(&self) {
        self.state.update(|s| s.error = None).await;
    }
}
