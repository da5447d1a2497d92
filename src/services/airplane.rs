use crate::client::ApiClient;
use crate::entities::airplane::{
    Airplane, AirplaneListParams, CreateAirplaneRequest, UpdateAirplaneRequest,
};
use crate::error::AppResult;

#[derive(Clone)]
pub struct AirplaneService {
    api: ApiClient,
}

impl AirplaneService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all_airplanes(&self, params: &AirplaneListParams) -> AppResult<Vec<Airplane>> {
        let mut params = params.clone();
        params.search = params.search.filter(|s| !s.is_empty());
        params.airline_id = params.airline_id.filter(|s| !s.is_empty());
        params.model = params.model.filter(|s| !s.is_empty());
        params.manufacture_year = params.manufacture_year.filter(|y| *y != 0);

        Ok(self
            .api
            .get_list_with(&["airplanes", "all"], &params)
            .await?
            .into_data())
    }

    pub async fn create_airplane(&self, request: &CreateAirplaneRequest) -> AppResult<Airplane> {
        Ok(self.api.post(&["airplane", "create"], request).await?.into_data())
    }

    pub async fn update_airplane(&self, request: &UpdateAirplaneRequest) -> AppResult<Airplane> {
        Ok(self.api.put(&["airplane", "update"], request).await?.into_data())
    }

    /// Soft delete; the returned airplane has `is_deleted` set.
    pub async fn delete_airplane(&self, id: &str) -> AppResult<Airplane> {
        Ok(self.api.post_empty(&["airplane", id, "delete"]).await?.into_data())
    }

    pub async fn activate_airplane(&self, id: &str) -> AppResult<Airplane> {
        Ok(self.api.post_empty(&["airplane", id, "activate"]).await?.into_data())
    }
}
