use std::collections::BTreeMap;

use crate::entities::booking::{
    AddBookingRequest, Booking, BookingStatistics, UpdateBookingRequest, status_text,
};
use crate::entities::ApiResponse;
use crate::error::AppResult;
use crate::services::BookingService;
use crate::stores::{Snapshot, StoreCell, replace_where};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingState {
    pub bookings: Vec<Booking>,
    pub current_booking: Option<Booking>,
}

impl BookingState {
    fn reconcile(&mut self, booking: &Booking) {
        replace_where(&mut self.bookings, booking, |b| b.id == booking.id);
        if self.current_booking.as_ref().is_some_and(|b| b.id == booking.id) {
            self.current_booking = Some(booking.clone());
        }
    }

    /// Per-flight count and revenue over bookings that are not soft-deleted.
    pub fn statistics(&self, period: &str) -> Vec<BookingStatistics> {
        let mut per_flight: BTreeMap<&str, (u32, f64)> = BTreeMap::new();
        for booking in self.bookings.iter().filter(|b| !b.is_deleted) {
            let entry = per_flight.entry(booking.flight_id.as_str()).or_default();
            entry.0 += 1;
            entry.1 += booking.total_price;
        }
        per_flight
            .into_iter()
            .map(|(flight_id, (total_bookings, total_revenue))| BookingStatistics {
                flight_id: flight_id.to_string(),
                total_bookings,
                total_revenue,
                period: period.to_string(),
            })
            .collect()
    }
}

#[derive(Clone)]
pub struct BookingStore {
    service: BookingService,
    state: StoreCell<BookingState>,
}

impl BookingStore {
    pub fn new(service: BookingService) -> Self {
        Self {
            service,
            state: StoreCell::new(),
        }
    }

    pub async fn snapshot(&self) -> Snapshot<BookingState> {
        self.state.snapshot().await
    }

    pub async fn booking(&self, id: &str) -> Option<Booking> {
        self.state
            .read(|state| state.bookings.iter().find(|b| b.id == id).cloned())
            .await
    }

    pub async fn fetch_bookings(&self, flight_id: Option<&str>) {
        let _ = self
            .state
            .run(
                "fetch_bookings",
                "Failed to fetch bookings",
                async { self.service.get_all_bookings(flight_id).await.map(ApiResponse::into_data) },
                |state, bookings| state.bookings = bookings.clone(),
                |_| {},
            )
            .await;
    }

    /// `None` on failure; the message is kept in `error`.
    pub async fn fetch_booking(&self, id: &str) -> Option<Booking> {
        self.state
            .run(
                "fetch_booking",
                "Failed to fetch booking",
                async { self.service.get_booking(id).await.map(ApiResponse::into_data) },
                |state, booking| state.current_booking = Some(booking.clone()),
                |_| {},
            )
            .await
            .ok()
    }

    /// Re-read one booking and reconcile it wherever it is cached.
    pub async fn refresh_booking(&self, id: &str) -> AppResult<Booking> {
        self.state
            .run(
                "refresh_booking",
                "Failed to refresh booking",
                async { self.service.get_booking(id).await.map(ApiResponse::into_data) },
                |state, booking| state.reconcile(booking),
                |_| {},
            )
            .await
    }

    pub async fn create_booking(&self, request: &AddBookingRequest) -> AppResult<Booking> {
        self.state
            .run(
                "create_booking",
                "Failed to create booking",
                async { self.service.create_booking(request).await.map(ApiResponse::into_data) },
                |state, created| state.bookings.push(created.clone()),
                |_| {},
            )
            .await
    }

    pub async fn update_booking(&self, request: &UpdateBookingRequest) -> AppResult<Booking> {
        self.state
            .run(
                "update_booking",
                "Failed to update booking",
                async { self.service.update_booking(request).await.map(ApiResponse::into_data) },
                |state, updated| {
                    replace_where(&mut state.bookings, updated, |b| b.id == request.id);
                    if state.current_booking.as_ref().is_some_and(|b| b.id == request.id) {
                        state.current_booking = Some(updated.clone());
                    }
                },
                |_| {},
            )
            .await
    }

    /// Soft delete: the cancelled booking stays in the list, flagged.
    pub async fn cancel_booking(&self, id: &str) -> AppResult<Booking> {
        self.state
            .run(
                "cancel_booking",
                "Failed to cancel booking",
                async { self.service.cancel_booking(id).await.map(ApiResponse::into_data) },
                |state, cancelled| {
                    replace_where(&mut state.bookings, cancelled, |b| b.id == id);
                    if state.current_booking.as_ref().is_some_and(|b| b.id == id) {
                        state.current_booking = Some(cancelled.clone());
                    }
                },
                |_| {},
            )
            .await
    }

    pub async fn statistics(&self, period: &str) -> Vec<BookingStatistics> {
        self.state.read(|state| state.statistics(period)).await
    }

    pub fn status_text(status: i32) -> &'static str {
        status_text(status)
    }

    pub async fn clear_error(&self) {
        self.state.update(|s| s.error = None).await;
    }
}
