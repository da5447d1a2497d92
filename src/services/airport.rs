use serde::Serialize;

use crate::client::ApiClient;
use crate::entities::airport::{AddAirportRequest, Airport, UpdateAirportRequest};
use crate::error::AppResult;

#[derive(Serialize)]
struct SearchQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
}

#[derive(Clone)]
pub struct AirportService {
    api: ApiClient,
}

impl AirportService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Blank searches are not sent.
    pub async fn get_all_airports(&self, search: Option<&str>) -> AppResult<Vec<Airport>> {
        let query = SearchQuery {
            search: search.map(str::trim).filter(|s| !s.is_empty()),
        };
        Ok(self.api.get_list_with(&["airport", "all"], &query).await?.into_data())
    }

    pub async fn get_airport_by_code(&self, iata_code: &str) -> AppResult<Airport> {
        Ok(self.api.get(&["airport", iata_code]).await?.into_data())
    }

    pub async fn create_airport(&self, request: &AddAirportRequest) -> AppResult<Airport> {
        Ok(self.api.post(&["airport", "create"], request).await?.into_data())
    }

    pub async fn update_airport(&self, request: &UpdateAirportRequest) -> AppResult<Airport> {
        Ok(self.api.put(&["airport", "update"], request).await?.into_data())
    }

    pub async fn delete_airport(&self, iata_code: &str) -> AppResult<Airport> {
        Ok(self.api.delete(&["airport", "delete", iata_code]).await?.into_data())
    }
}
