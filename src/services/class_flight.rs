use serde::Serialize;

use crate::client::ApiClient;
use crate::entities::class_flight::{ClassFlight, CreateClassFlightRequest, UpdateClassFlightRequest};
use crate::error::AppResult;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ByFlight<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    flight_id: Option<&'a str>,
}

#[derive(Clone)]
pub struct ClassFlightService {
    api: ApiClient,
}

impl ClassFlightService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all_class_flights(&self, flight_id: Option<&str>) -> AppResult<Vec<ClassFlight>> {
        let query = ByFlight {
            flight_id: flight_id.filter(|id| !id.is_empty()),
        };
        Ok(self.api.get_list_with(&["classFlight"], &query).await?.into_data())
    }

    pub async fn get_class_flight_by_id(&self, id: i64) -> AppResult<ClassFlight> {
        Ok(self.api.get(&["classFlight", &id.to_string()]).await?.into_data())
    }

    pub async fn create_class_flight(&self, request: &CreateClassFlightRequest) -> AppResult<ClassFlight> {
        Ok(self.api.post(&["classFlight", "create"], request).await?.into_data())
    }

    pub async fn update_class_flight(&self, request: &UpdateClassFlightRequest) -> AppResult<ClassFlight> {
        Ok(self.api.put(&["classFlight", "update"], request).await?.into_data())
    }

    pub async fn delete_class_flight(&self, id: i64) -> AppResult<ClassFlight> {
        Ok(self
            .api
            .post_empty(&["classFlight", "delete", &id.to_string()])
            .await?
            .into_data())
    }
}
