use crate::entities::airline::Airline;
use crate::services::AirlineService;
use crate::stores::{Snapshot, StoreCell};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirlineState {
    pub airlines: Vec<Airline>,
}

#[derive(Clone)]
pub struct AirlineStore {
    service: AirlineService,
    state: StoreCell<AirlineState>,
}

impl AirlineStore {
    pub fn new(service: AirlineService) -> Self {
        Self {
            service,
            state: StoreCell::new(),
        }
    }

    pub async fn snapshot(&self) -> Snapshot<AirlineState> {
        self.state.snapshot().await
    }

    /// Passive refresh: failures only land in `error`.
    pub async fn fetch_airlines(&self) {
        let _ = self
            .state
            .run(
                "fetch_airlines",
                "Failed to fetch airlines",
                self.service.get_all_airlines(),
                |state, airlines| state.airlines = airlines.clone(),
                |_| {},
            )
            .await;
    }

    /// Display name for `airline_id`, or the id itself when unknown.
    pub async fn airline_name(&self, airline_id: &str) -> String {
        self.state
            .read(|state| {
                state
                    .airlines
                    .iter()
                    .find(|a| a.id == airline_id)
                    .map(|a| a.name.clone())
            })
            .await
            .unwrap_or_else(|| airline_id.to_string())
    }
}
