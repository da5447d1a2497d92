use crate::client::ApiClient;
use crate::entities::seat::{AddSeatRequest, Seat, SeatListParams, UpdateSeatRequest};
use crate::error::AppResult;

#[derive(Clone)]
pub struct SeatService {
    api: ApiClient,
}

impl SeatService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all_seats(&self, params: &SeatListParams) -> AppResult<Vec<Seat>> {
        let mut query = params.clone();
        query.flight_id = query.flight_id.filter(|id| !id.is_empty());
        Ok(self.api.get_list_with(&["seat"], &query).await?.into_data())
    }

    pub async fn get_seats_by_class_flight(&self, class_flight_id: i64) -> AppResult<Vec<Seat>> {
        self.get_all_seats(&SeatListParams {
            class_flight_id: Some(class_flight_id),
            flight_id: None,
        })
        .await
    }

    pub async fn get_seats_by_flight(&self, flight_id: &str) -> AppResult<Vec<Seat>> {
        self.get_all_seats(&SeatListParams {
            class_flight_id: None,
            flight_id: Some(flight_id.to_string()),
        })
        .await
    }

    pub async fn get_seat_by_id(&self, id: i64) -> AppResult<Seat> {
        Ok(self.api.get(&["seat", &id.to_string()]).await?.into_data())
    }

    pub async fn create_seat(&self, request: &AddSeatRequest) -> AppResult<Seat> {
        Ok(self.api.post(&["seat", "create"], request).await?.into_data())
    }

    pub async fn update_seat(&self, request: &UpdateSeatRequest) -> AppResult<Seat> {
        Ok(self.api.put(&["seat", "update"], request).await?.into_data())
    }

    pub async fn delete_seat(&self, id: i64) -> AppResult<Seat> {
        Ok(self
            .api
            .post_empty(&["seat", "delete", &id.to_string()])
            .await?
            .into_data())
    }
}
