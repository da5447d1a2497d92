use crate::entities::flight::{
    AddFlightRequest, Flight, FlightListParams, UpdateFlightRequest, status_badge_class, status_text,
};
use crate::error::AppResult;
use crate::services::FlightService;
use crate::stores::{Snapshot, StoreCell, replace_where};

#[derive(Debug, Clone, PartialEq)]
pub struct FlightState {
    pub flights: Vec<Flight>,
    pub selected_flight: Option<Flight>,
    pub filters: FlightListParams,
    pub one_way: bool,
    pub selected_departure_flight_id: Option<String>,
    pub selected_return_flight_id: Option<String>,
}

fn default_filters() -> FlightListParams {
    FlightListParams {
        include_deleted: Some(false),
        ..Default::default()
    }
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            flights: Vec::new(),
            selected_flight: None,
            filters: default_filters(),
            one_way: true,
            selected_departure_flight_id: None,
            selected_return_flight_id: None,
        }
    }
}

impl FlightState {
    /// Flights that are not soft-deleted.
    pub fn active_flights(&self) -> Vec<&Flight> {
        self.flights.iter().filter(|f| !f.is_deleted).collect()
    }

    fn reconcile(&mut self, flight: &Flight) {
        replace_where(&mut self.flights, flight, |f| f.id == flight.id);
        if self.selected_flight.as_ref().is_some_and(|f| f.id == flight.id) {
            self.selected_flight = Some(flight.clone());
        }
    }
}

#[derive(Clone)]
pub struct FlightStore {
    service: FlightService,
    state: StoreCell<FlightState>,
}

impl FlightStore {
    pub fn new(service: FlightService) -> Self {
        Self {
            service,
            state: StoreCell::new(),
        }
    }

    pub async fn snapshot(&self) -> Snapshot<FlightState> {
        self.state.snapshot().await
    }

    pub async fn active_flights(&self) -> Vec<Flight> {
        self.state
            .read(|state| state.active_flights().into_iter().cloned().collect())
            .await
    }

    /// Fetch with the current filters; fields set in `params` take priority.
    pub async fn fetch_flights(&self, params: Option<&FlightListParams>) -> AppResult<Vec<Flight>> {
        let filters = self.state.read(|state| state.filters.clone()).await;
        let query = match params {
            Some(params) => filters.merged_with(params),
            None => filters,
        };

        self.state
            .run(
                "fetch_flights",
                "Failed to fetch flights",
                self.service.get_all_flights(&query),
                |state, flights| state.flights = flights.clone(),
                |_| {},
            )
            .await
    }

    pub async fn fetch_flight_detail(&self, id: &str) -> AppResult<Flight> {
        self.state
            .run(
                "fetch_flight_detail",
                "Failed to fetch flight detail",
                self.service.get_flight_by_id(id),
                |state, flight| state.selected_flight = Some(flight.clone()),
                |_| {},
            )
            .await
    }

    pub async fn create_flight(&self, request: &AddFlightRequest) -> AppResult<Flight> {
        self.state
            .run(
                "create_flight",
                "Failed to create flight",
                self.service.create_flight(request),
                |state, created| state.flights.push(created.clone()),
                |_| {},
            )
            .await
    }

    pub async fn update_flight(&self, request: &UpdateFlightRequest) -> AppResult<Flight> {
        self.state
            .run(
                "update_flight",
                "Failed to update flight",
                self.service.update_flight(request),
                |state, updated| state.reconcile(updated),
                |_| {},
            )
            .await
    }

    /// Soft delete: the flagged flight stays in the list.
    pub async fn delete_flight(&self, id: &str) -> AppResult<Flight> {
        self.state
            .run(
                "delete_flight",
                "Failed to delete flight",
                self.service.delete_flight(id),
                |state, deleted| {
                    replace_where(&mut state.flights, deleted, |f| f.id == id);
                    if state.selected_flight.as_ref().is_some_and(|f| f.id == id) {
                        state.selected_flight = Some(deleted.clone());
                    }
                },
                |_| {},
            )
            .await
    }

    pub fn status_text(status: i32) -> &'static str {
        status_text(status)
    }

    pub fn status_badge_class(status: i32) -> &'static str {
        status_badge_class(status)
    }

    /// Merge the set fields of `next` into the current filters.
    pub async fn set_filters(&self, next: FlightListParams) {
        self.state
            .update(|s| s.data.filters = s.data.filters.merged_with(&next))
            .await;
    }

    pub async fn reset_filters(&self) {
        self.state.update(|s| s.data.filters = default_filters()).await;
    }

    /// Switching to one-way drops any chosen return flight.
    pub async fn set_one_way(&self, one_way: bool) {
        self.state
            .update(|s| {
                s.data.one_way = one_way;
                if one_way {
                    s.data.selected_return_flight_id = None;
                }
            })
            .await;
    }

    pub async fn select_departure(&self, id: &str) {
        self.state
            .update(|s| s.data.selected_departure_flight_id = Some(id.to_string()))
            .await;
    }

    pub async fn select_return(&self, id: &str) {
        self.state
            .update(|s| s.data.selected_return_flight_id = Some(id.to_string()))
            .await;
    }
}
