use uuid::Uuid;

use crate::client::ApiClient;
use crate::entities::ApiResponse;
use crate::entities::passenger::{AddPassengerRequest, Passenger, UpdatePassengerRequest};
use crate::error::AppResult;

#[derive(Clone)]
pub struct PassengerService {
    api: ApiClient,
}

impl PassengerService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all_passengers(&self) -> AppResult<ApiResponse<Vec<Passenger>>> {
        self.api.get_list(&["passenger"]).await
    }

    pub async fn get_passenger(&self, id: Uuid) -> AppResult<ApiResponse<Passenger>> {
        self.api.get(&["passenger", &id.to_string()]).await
    }

    pub async fn create_passenger(&self, request: &AddPassengerRequest) -> AppResult<ApiResponse<Passenger>> {
        self.api.post(&["passenger", "create"], request).await
    }

    pub async fn update_passenger(&self, request: &UpdatePassengerRequest) -> AppResult<ApiResponse<Passenger>> {
        self.api.put(&["passenger", "update"], request).await
    }

    pub async fn delete_passenger(&self, id: Uuid) -> AppResult<ApiResponse<Passenger>> {
        self.api
            .post_empty(&["passenger", "delete", &id.to_string()])
            .await
    }
}
