use crate::entities::airport::{AddAirportRequest, Airport, AirportOption, UpdateAirportRequest};
use crate::error::AppResult;
use crate::services::AirportService;
use crate::stores::{Snapshot, StoreCell, remove_where, replace_where, upsert_where};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirportState {
    pub airports: Vec<Airport>,
    /// Trimmed search of the last list fetch.
    pub last_query: String,
}

#[derive(Clone)]
pub struct AirportStore {
    service: AirportService,
    state: StoreCell<AirportState>,
}

impl AirportStore {
    pub fn new(service: AirportService) -> Self {
        Self {
            service,
            state: StoreCell::new(),
        }
    }

    pub async fn snapshot(&self) -> Snapshot<AirportState> {
        self.state.snapshot().await
    }

    pub async fn fetch_airports(&self, search: Option<&str>) {
        let query = search.map(str::trim).unwrap_or_default().to_string();
        self.state
            .update(|s| s.data.last_query = query.clone())
            .await;

        let _ = self
            .state
            .run(
                "fetch_airports",
                "Failed to fetch airports",
                self.service.get_all_airports(Some(&query)),
                |state, airports| state.airports = airports.clone(),
                |_| {},
            )
            .await;
    }

    pub async fn get_airport(&self, iata_code: &str) -> AppResult<Airport> {
        self.state
            .run(
                "get_airport",
                "Failed to fetch airport",
                self.service.get_airport_by_code(iata_code),
                |state, airport| {
                    upsert_where(&mut state.airports, airport, |a| a.iata_code == airport.iata_code)
                },
                |_| {},
            )
            .await
    }

    pub async fn create_airport(&self, request: &AddAirportRequest) -> AppResult<Airport> {
        self.state
            .run(
                "create_airport",
                "Failed to create airport",
                self.service.create_airport(request),
                |state, created| state.airports.push(created.clone()),
                |_| {},
            )
            .await
    }

    pub async fn update_airport(&self, request: &UpdateAirportRequest) -> AppResult<Airport> {
        self.state
            .run(
                "update_airport",
                "Failed to update airport",
                self.service.update_airport(request),
                |state, updated| {
                    replace_where(&mut state.airports, updated, |a| a.iata_code == request.iata_code);
                },
                |_| {},
            )
            .await
    }

    /// Airports are deleted physically.
    pub async fn delete_airport(&self, iata_code: &str) -> AppResult<Airport> {
        self.state
            .run(
                "delete_airport",
                "Failed to delete airport",
                self.service.delete_airport(iata_code),
                |state, _| {
                    remove_where(&mut state.airports, |a| a.iata_code == iata_code);
                },
                |_| {},
            )
            .await
    }

    pub async fn airport_label(&self, code: &str) -> String {
        self.state
            .read(|state| state.airports.iter().find(|a| a.iata_code == code).map(Airport::label))
            .await
            .unwrap_or_else(|| code.to_string())
    }

    pub async fn airport_options(&self) -> Vec<AirportOption> {
        self.state
            .read(|state| state.airports.iter().map(Airport::option).collect())
            .await
    }
}
