use uuid::Uuid;

use crate::client::ApiClient;
use crate::entities::ApiResponse;
use crate::entities::bill::{Bill, BillQueryAll, BillQueryCustomer, BillQueryService, PayBillRequest};
use crate::error::AppResult;

#[derive(Clone)]
pub struct BillService {
    api: ApiClient,
}

impl BillService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Every bill, optionally filtered (Superadmin).
    pub async fn get_all_bills(&self, query: &BillQueryAll) -> AppResult<ApiResponse<Vec<Bill>>> {
        let mut query = query.clone();
        query.service_name = query.service_name.filter(|s| !s.is_empty());
        self.api.get_list_with(&["bill"], &query).await
    }

    /// Bills of the customer identified by the bearer token.
    pub async fn get_customer_bills(&self, query: &BillQueryCustomer) -> AppResult<ApiResponse<Vec<Bill>>> {
        self.api.get_list_with(&["bill", "customer"], query).await
    }

    /// Bills owned by one service, e.g. `flight` or `tourpackage`.
    pub async fn get_service_bills(&self, query: &BillQueryService) -> AppResult<ApiResponse<Vec<Bill>>> {
        self.api
            .get_list_with(&["bill", query.service_name.as_str()], query)
            .await
    }

    pub async fn get_bill_detail(&self, bill_id: Uuid) -> AppResult<ApiResponse<Bill>> {
        self.api
            .get(&["bill", "detail", &bill_id.to_string()])
            .await
    }

    /// The body defaults to `{billId}` when no payload is given.
    pub async fn pay_bill(&self, bill_id: Uuid, payload: Option<&PayBillRequest>) -> AppResult<ApiResponse<Bill>> {
        let default_body = PayBillRequest {
            bill_id,
            customer_id: None,
        };
        let body = payload.unwrap_or(&default_body);
        self.api
            .post(&["bill", &bill_id.to_string(), "pay"], body)
            .await
    }
}
