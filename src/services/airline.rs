use crate::client::ApiClient;
use crate::entities::airline::Airline;
use crate::error::AppResult;

#[derive(Clone)]
pub struct AirlineService {
    api: ApiClient,
}

impl AirlineService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all_airlines(&self) -> AppResult<Vec<Airline>> {
        Ok(self.api.get_list(&["airline", "all"]).await?.into_data())
    }
}
