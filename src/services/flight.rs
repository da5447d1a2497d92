use crate::client::ApiClient;
use crate::entities::flight::{AddFlightRequest, Flight, FlightListParams, UpdateFlightRequest};
use crate::error::AppResult;

#[derive(Clone)]
pub struct FlightService {
    api: ApiClient,
}

impl FlightService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all_flights(&self, params: &FlightListParams) -> AppResult<Vec<Flight>> {
        let query = params.clone().normalized();
        Ok(self.api.get_list_with(&["flight", "all"], &query).await?.into_data())
    }

    pub async fn get_flight_by_id(&self, id: &str) -> AppResult<Flight> {
        Ok(self.api.get(&["flight", id]).await?.into_data())
    }

    pub async fn create_flight(&self, request: &AddFlightRequest) -> AppResult<Flight> {
        Ok(self.api.post(&["flight", "create"], request).await?.into_data())
    }

    pub async fn update_flight(&self, request: &UpdateFlightRequest) -> AppResult<Flight> {
        Ok(self.api.put(&["flight", "update"], request).await?.into_data())
    }

    /// Soft delete; the flight comes back flagged rather than disappearing.
    pub async fn delete_flight(&self, id: &str) -> AppResult<Flight> {
        Ok(self.api.post_empty(&["flight", "delete", id]).await?.into_data())
    }
}
