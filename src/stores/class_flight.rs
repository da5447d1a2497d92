use std::collections::HashMap;

use crate::entities::class_flight::{ClassFlight, CreateClassFlightRequest, UpdateClassFlightRequest};
use crate::error::AppResult;
use crate::services::ClassFlightService;
use crate::stores::{Snapshot, StoreCell, remove_where, replace_where, upsert_where};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassFlightState {
    /// Fare classes per flight id, in server order.
    pub by_flight: HashMap<String, Vec<ClassFlight>>,
    pub items: HashMap<i64, ClassFlight>,
}

impl ClassFlightState {
    fn index(&mut self, class: &ClassFlight) {
        self.items.insert(class.id, class.clone());
    }
}

#[derive(Clone)]
pub struct ClassFlightStore {
    service: ClassFlightService,
    state: StoreCell<ClassFlightState>,
}

impl ClassFlightStore {
    pub fn new(service: ClassFlightService) -> Self {
        Self {
            service,
            state: StoreCell::new(),
        }
    }

    pub async fn snapshot(&self) -> Snapshot<ClassFlightState> {
        self.state.snapshot().await
    }

    pub async fn classes_for(&self, flight_id: &str) -> Vec<ClassFlight> {
        self.state
            .read(|state| state.by_flight.get(flight_id).cloned().unwrap_or_default())
            .await
    }

    pub async fn fetch_by_flight(&self, flight_id: &str) -> AppResult<Vec<ClassFlight>> {
        self.state
            .run(
                "fetch_class_flights",
                "Failed to fetch class flights",
                self.service.get_all_class_flights(Some(flight_id)),
                |state, list| {
                    state.by_flight.insert(flight_id.to_string(), list.clone());
                    for class in list {
                        state.index(class);
                    }
                },
                |_| {},
            )
            .await
    }

    pub async fn fetch_by_id(&self, id: i64) -> AppResult<ClassFlight> {
        self.state
            .run(
                "fetch_class_flight",
                "Failed to fetch class flight",
                self.service.get_class_flight_by_id(id),
                |state, class| {
                    state.index(class);
                    if !class.flight_id.is_empty() {
                        let list = state.by_flight.entry(class.flight_id.clone()).or_default();
                        upsert_where(list, class, |c| c.id == class.id);
                    }
                },
                |_| {},
            )
            .await
    }

    pub async fn create(&self, request: &CreateClassFlightRequest) -> AppResult<ClassFlight> {
        self.state
            .run(
                "create_class_flight",
                "Failed to create class flight",
                self.service.create_class_flight(request),
                |state, created| {
                    state.index(created);
                    state
                        .by_flight
                        .entry(request.flight_id.clone())
                        .or_default()
                        .push(created.clone());
                },
                |_| {},
            )
            .await
    }

    pub async fn update(&self, request: &UpdateClassFlightRequest) -> AppResult<ClassFlight> {
        self.state
            .run(
                "update_class_flight",
                "Failed to update class flight",
                self.service.update_class_flight(request),
                |state, updated| {
                    state.index(updated);
                    if let Some(list) = state.by_flight.get_mut(&updated.flight_id) {
                        replace_where(list, updated, |c| c.id == updated.id);
                    }
                },
                |_| {},
            )
            .await
    }

    /// Drops the class from `items` and from every flight list.
    pub async fn remove(&self, id: i64) -> AppResult<ClassFlight> {
        self.state
            .run(
                "delete_class_flight",
                "Failed to delete class flight",
                self.service.delete_class_flight(id),
                |state, _| {
                    state.items.remove(&id);
                    for list in state.by_flight.values_mut() {
                        remove_where(list, |c| c.id == id);
                    }
                },
                |_| {},
            )
            .await
    }
}
