use uuid::Uuid;

use crate::entities::bill::{
    Bill, BillQueryAll, BillQueryCustomer, BillQueryService, BillStatus, PayBillRequest,
};
use crate::entities::ApiResponse;
use crate::error::AppResult;
use crate::services::BillService;
use crate::stores::{BookingStore, Snapshot, StoreCell, replace_where};

pub const PAYMENT_SUCCESS: &str = "Payment successful";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillState {
    pub all_bills: Vec<Bill>,
    pub customer_bills: Vec<Bill>,
    pub service_bills: Vec<Bill>,
    pub current_bill: Option<Bill>,
    pub success_message: Option<String>,
}

impl BillState {
    fn reconcile_paid(&mut self, paid: &Bill) {
        for list in [&mut self.all_bills, &mut self.customer_bills, &mut self.service_bills] {
            replace_where(list, paid, |b| b.id == paid.id);
        }
        self.current_bill = Some(paid.clone());
    }
}

#[derive(Clone)]
pub struct BillStore {
    service: BillService,
    state: StoreCell<BillState>,
    bookings: Option<BookingStore>,
}

impl BillStore {
    pub fn new(service: BillService) -> Self {
        Self {
            service,
            state: StoreCell::new(),
            bookings: None,
        }
    }

    /// Paying a flight bill refreshes the booking it references in `bookings`.
    pub fn with_booking_store(mut self, bookings: BookingStore) -> Self {
        self.bookings = Some(bookings);
        self
    }

    pub async fn snapshot(&self) -> Snapshot<BillState> {
        self.state.snapshot().await
    }

    pub async fn fetch_all_bills(&self, query: &BillQueryAll) {
        let _ = self
            .state
            .run(
                "fetch_all_bills",
                "Failed to fetch bills",
                async { self.service.get_all_bills(query).await.map(ApiResponse::into_data) },
                |state, bills| state.all_bills = bills.clone(),
                |state| state.all_bills.clear(),
            )
            .await;
    }

    pub async fn fetch_customer_bills(&self, query: &BillQueryCustomer) {
        let _ = self
            .state
            .run(
                "fetch_customer_bills",
                "Failed to fetch customer bills",
                async { self.service.get_customer_bills(query).await.map(ApiResponse::into_data) },
                |state, bills| state.customer_bills = bills.clone(),
                |state| state.customer_bills.clear(),
            )
            .await;
    }

    pub async fn fetch_service_bills(&self, query: &BillQueryService) {
        let _ = self
            .state
            .run(
                "fetch_service_bills",
                "Failed to fetch service bills",
                async { self.service.get_service_bills(query).await.map(ApiResponse::into_data) },
                |state, bills| state.service_bills = bills.clone(),
                |state| state.service_bills.clear(),
            )
            .await;
    }

    pub async fn fetch_bill_detail(&self, bill_id: Uuid) -> Option<Bill> {
        self.state
            .run(
                "fetch_bill_detail",
                "Failed to fetch bill detail",
                async { self.service.get_bill_detail(bill_id).await.map(ApiResponse::into_data) },
                |state, bill| state.current_bill = Some(bill.clone()),
                |state| state.current_bill = None,
            )
            .await
            .ok()
    }

    /// Pay a bill and reconcile it in every cached list.
    ///
    /// For flight bills the referenced booking is refreshed afterwards; a
    /// failed refresh is logged and does not fail the payment.
    pub async fn pay_bill(&self, bill_id: Uuid, customer_id: Option<Uuid>) -> AppResult<Bill> {
        self.state.update(|s| s.data.success_message = None).await;

        let request = PayBillRequest {
            bill_id,
            customer_id,
        };
        let paid = self
            .state
            .run(
                "pay_bill",
                "Payment failed. An unexpected error occurred, please try again later",
                async { self.service.pay_bill(bill_id, Some(&request)).await.map(ApiResponse::into_data) },
                |state, paid| {
                    state.reconcile_paid(paid);
                    state.success_message = Some(PAYMENT_SUCCESS.to_string());
                },
                |_| {},
            )
            .await?;

        if paid.is_flight_bill() && !paid.service_reference_id.is_empty() {
            if let Some(bookings) = &self.bookings {
                if let Err(e) = bookings.refresh_booking(&paid.service_reference_id).await {
                    tracing::warn!(
                        bill_id = %paid.id,
                        booking_id = %paid.service_reference_id,
                        error = %e,
                        "Failed to refresh booking after payment"
                    );
                }
            }
        }

        Ok(paid)
    }

    pub fn status_text(status: BillStatus) -> &'static str {
        status.label()
    }

    pub async fn clear_error(&self) {
        self.state.update(|s| s.error = None).await;
    }

    pub async fn clear_success(&self) {
        self.state.update(|s| s.data.success_message = None).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn bill(id: Uuid, status: BillStatus) -> Bill {
        Bill {
            id,
            customer_id: Uuid::nil(),
            service_name: "flight".to_string(),
            service_reference_id: "BK-1".to_string(),
            description: "Booking BK-1".to_string(),
            amount: 1_500_000.0,
            status,
            created_at: Utc::now(),
            updated_at: None,
            payment_timestamp: None,
        }
    }

    #[test]
    fn test_paid_bill_replaced_everywhere() {
        let id = Uuid::new_v4();
        let other = Uuid::new_v4();
        let mut state = BillState {
            all_bills: vec![bill(other, BillStatus::Unpaid), bill(id, BillStatus::Unpaid)],
            customer_bills: vec![bill(id, BillStatus::Unpaid)],
            service_bills: vec![bill(other, BillStatus::Unpaid)],
            ..Default::default()
        };

        state.reconcile_paid(&bill(id, BillStatus::Paid));

        assert_eq!(state.all_bills[1].status, BillStatus::Paid);
        assert_eq!(state.all_bills[0].status, BillStatus::Unpaid);
        assert_eq!(state.customer_bills[0].status, BillStatus::Paid);
        assert_eq!(state.service_bills.len(), 1);
        assert_eq!(state.service_bills[0].id, other);
        assert_eq!(state.current_bill.map(|b| b.id), Some(id));
    }
}
