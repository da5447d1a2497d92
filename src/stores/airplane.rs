use crate::entities::airplane::{
    Airplane, AirplaneListParams, CreateAirplaneRequest, UpdateAirplaneRequest,
};
use crate::error::AppResult;
use crate::services::AirplaneService;
use crate::stores::{Snapshot, StoreCell, replace_where};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirplaneState {
    pub airplanes: Vec<Airplane>,
}

#[derive(Clone)]
pub struct AirplaneStore {
    service: AirplaneService,
    state: StoreCell<AirplaneState>,
}

impl AirplaneStore {
    pub fn new(service: AirplaneService) -> Self {
        Self {
            service,
            state: StoreCell::new(),
        }
    }

    pub async fn snapshot(&self) -> Snapshot<AirplaneState> {
        self.state.snapshot().await
    }

    pub async fn fetch_airplanes(&self, params: &AirplaneListParams) {
        let _ = self
            .state
            .run(
                "fetch_airplanes",
                "Failed to fetch airplanes",
                self.service.get_all_airplanes(params),
                |state, airplanes| state.airplanes = airplanes.clone(),
                |_| {},
            )
            .await;
    }

    pub async fn create_airplane(&self, request: &CreateAirplaneRequest) -> AppResult<Airplane> {
        self.state
            .run(
                "create_airplane",
                "Failed to create airplane",
                self.service.create_airplane(request),
                |state, created| state.airplanes.push(created.clone()),
                |_| {},
            )
            .await
    }

    pub async fn update_airplane(&self, request: &UpdateAirplaneRequest) -> AppResult<Airplane> {
        self.state
            .run(
                "update_airplane",
                "Failed to update airplane",
                self.service.update_airplane(request),
                |state, updated| {
                    replace_where(&mut state.airplanes, updated, |a| a.id == request.id);
                },
                |_| {},
            )
            .await
    }

    /// Soft delete: the flagged airplane stays in the list.
    pub async fn delete_airplane(&self, id: &str) -> AppResult<Airplane> {
        self.state
            .run(
                "delete_airplane",
                "Failed to delete airplane",
                self.service.delete_airplane(id),
                |state, deleted| {
                    replace_where(&mut state.airplanes, deleted, |a| a.id == id);
                },
                |_| {},
            )
            .await
    }

    pub async fn activate_airplane(&self, id: &str) -> AppResult<Airplane> {
        self.state
            .run(
                "activate_airplane",
                "Failed to activate airplane",
                self.service.activate_airplane(id),
                |state, activated| {
                    replace_where(&mut state.airplanes, activated, |a| a.id == id);
                },
                |_| {},
            )
            .await
    }
}
