use std::collections::HashMap;

use crate::entities::seat::{AddSeatRequest, Seat, UpdateSeatRequest};
use crate::error::AppResult;
use crate::services::SeatService;
use crate::stores::{Snapshot, StoreCell, remove_where, replace_where};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatState {
    pub items: HashMap<i64, Seat>,
    pub by_class_flight: HashMap<i64, Vec<Seat>>,
    pub by_flight: HashMap<String, Vec<Seat>>,
}

impl SeatState {
    fn index_all(&mut self, seats: &[Seat]) {
        for seat in seats {
            self.items.insert(seat.id, seat.clone());
        }
    }
}

#[derive(Clone)]
pub struct SeatStore {
    service: SeatService,
    state: StoreCell<SeatState>,
}

impl SeatStore {
    pub fn new(service: SeatService) -> Self {
        Self {
            service,
            state: StoreCell::new(),
        }
    }

    pub async fn snapshot(&self) -> Snapshot<SeatState> {
        self.state.snapshot().await
    }

    pub async fn seat(&self, id: i64) -> Option<Seat> {
        self.state.read(|state| state.items.get(&id).cloned()).await
    }

    pub async fn fetch_by_class_flight(&self, class_flight_id: i64) -> AppResult<Vec<Seat>> {
        self.state
            .run(
                "fetch_seats_by_class_flight",
                "Failed to fetch seats by class flight",
                self.service.get_seats_by_class_flight(class_flight_id),
                |state, seats| {
                    state.by_class_flight.insert(class_flight_id, seats.clone());
                    state.index_all(seats);
                },
                |_| {},
            )
            .await
    }

    pub async fn fetch_by_flight(&self, flight_id: &str) -> AppResult<Vec<Seat>> {
        self.state
            .run(
                "fetch_seats_by_flight",
                "Failed to fetch seats by flight",
                self.service.get_seats_by_flight(flight_id),
                |state, seats| {
                    state.by_flight.insert(flight_id.to_string(), seats.clone());
                    state.index_all(seats);
                },
                |_| {},
            )
            .await
    }

    pub async fn fetch_by_id(&self, id: i64) -> AppResult<Seat> {
        self.state
            .run(
                "fetch_seat",
                "Failed to fetch seat",
                self.service.get_seat_by_id(id),
                |state, seat| {
                    state.items.insert(seat.id, seat.clone());
                },
                |_| {},
            )
            .await
    }

    pub async fn create(&self, request: &AddSeatRequest) -> AppResult<Seat> {
        self.state
            .run(
                "create_seat",
                "Failed to create seat",
                self.service.create_seat(request),
                |state, seat| {
                    state.items.insert(seat.id, seat.clone());
                    state
                        .by_class_flight
                        .entry(request.class_flight_id)
                        .or_default()
                        .push(seat.clone());
                },
                |_| {},
            )
            .await
    }

    /// Books (`passenger_id: Some`) or releases a seat.
    pub async fn update(&self, request: &UpdateSeatRequest) -> AppResult<Seat> {
        self.state
            .run(
                "update_seat",
                "Failed to update seat",
                self.service.update_seat(request),
                |state, seat| {
                    state.items.insert(seat.id, seat.clone());
                    for list in state.by_class_flight.values_mut() {
                        replace_where(list, seat, |s| s.id == seat.id);
                    }
                    for list in state.by_flight.values_mut() {
                        replace_where(list, seat, |s| s.id == seat.id);
                    }
                },
                |_| {},
            )
            .await
    }

    pub async fn remove(&self, id: i64) -> AppResult<Seat> {
        self.state
            .run(
                "delete_seat",
                "Failed to delete seat",
                self.service.delete_seat(id),
                |state, _| {
                    state.items.remove(&id);
                    for list in state.by_class_flight.values_mut() {
                        remove_where(list, |s| s.id == id);
                    }
                    for list in state.by_flight.values_mut() {
                        remove_where(list, |s| s.id == id);
                    }
                },
                |_| {},
            )
            .await
    }
}
