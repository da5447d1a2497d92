//! Client-side state containers.
//!
//! Each store caches what its service last returned. An action marks the
//! store as loading, awaits the remote call without holding the lock, and only
//! then reconciles the cache; failures leave the cache untouched and record a
//! message in `error`. Concurrent actions are not ordered: whichever response
//! settles last wins.

pub mod airline;
pub mod airplane;
pub mod airport;
pub mod auth;
pub mod bill;
pub mod booking;
pub mod booking_passenger;
pub mod class_flight;
pub mod flight;
pub mod passenger;
pub mod seat;

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::AppResult;

pub use airline::AirlineStore;
pub use airplane::AirplaneStore;
pub use airport::AirportStore;
pub use auth::AuthStore;
pub use bill::BillStore;
pub use booking::BookingStore;
pub use booking_passenger::BookingPassengerStore;
pub use class_flight::ClassFlightStore;
pub use flight::FlightStore;
pub use passenger::PassengerStore;
pub use seat::SeatStore;

/// Point-in-time copy of a store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot<S> {
    pub data: S,
    pub loading: bool,
    pub error: Option<String>,
}

/// Shared, lock-protected state behind every store.
#[derive(Debug)]
pub(crate) struct StoreCell<S> {
    inner: Arc<RwLock<Snapshot<S>>>,
}

impl<S> Clone for StoreCell<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Default + Clone> StoreCell<S> {
    pub(crate) fn new() -> Self {
        Self::from_data(S::default())
    }

    pub(crate) fn from_data(data: S) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Snapshot {
                data,
                loading: false,
                error: None,
            })),
        }
    }

    pub(crate) async fn snapshot(&self) -> Snapshot<S> {
        self.inner.read().await.clone()
    }

    pub(crate) async fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.read().await.data)
    }

    pub(crate) async fn update<R>(&self, f: impl FnOnce(&mut Snapshot<S>) -> R) -> R {
        f(&mut *self.inner.write().await)
    }

    /// Run one store action.
    ///
    /// `reconcile` runs only when `call` succeeds; `on_error` runs on failure
    /// after the error message has been recorded.
    pub(crate) async fn run<T, Fut>(
        &self,
        action: &'static str,
        fallback: &'static str,
        call: Fut,
        reconcile: impl FnOnce(&mut S, &T),
        on_error: impl FnOnce(&mut S),
    ) -> AppResult<T>
    where
        Fut: Future<Output = AppResult<T>>,
    {
        self.update(|state| {
            state.loading = true;
            state.error = None;
        })
        .await;

        let result = call.await;

        let mut state = self.inner.write().await;
        state.loading = false;
        match &result {
            Ok(value) => reconcile(&mut state.data, value),
            Err(e) => {
                let message = e.user_message(fallback);
                tracing::warn!(action, error = %e, "{}", fallback);
                state.error = Some(message);
                on_error(&mut state.data);
            }
        }
        result
    }
}

/// Replace the first element matching `is_target`; returns whether one matched.
pub(crate) fn replace_where<T>(list: &mut [T], item: &T, is_target: impl Fn(&T) -> bool) -> bool
where
    T: Clone,
{
    match list.iter_mut().find(|existing| is_target(existing)) {
        Some(slot) => {
            *slot = item.clone();
            true
        }
        None => false,
    }
}

/// Replace in place or append.
pub(crate) fn upsert_where<T>(list: &mut Vec<T>, item: &T, is_target: impl Fn(&T) -> bool)
where
    T: Clone,
{
    if !replace_where(list, item, is_target) {
        list.push(item.clone());
    }
}

/// Drop every element matching `is_target`; returns how many were removed.
pub(crate) fn remove_where<T>(list: &mut Vec<T>, is_target: impl Fn(&T) -> bool) -> usize {
    let before = list.len();
    list.retain(|existing| !is_target(existing));
    before - list.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_replace_where() {
        let mut list = vec![(1, "a"), (2, "b")];
        assert!(replace_where(&mut list, &(2, "B"), |x| x.0 == 2));
        assert_eq!(list, vec![(1, "a"), (2, "B")]);
        assert!(!replace_where(&mut list, &(3, "c"), |x| x.0 == 3));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_upsert_and_remove() {
        let mut list = vec![(1, "a")];
        upsert_where(&mut list, &(1, "A"), |x| x.0 == 1);
        upsert_where(&mut list, &(2, "b"), |x| x.0 == 2);
        assert_eq!(list, vec![(1, "A"), (2, "b")]);
        assert_eq!(remove_where(&mut list, |x| x.0 == 1), 1);
        assert_eq!(list, vec![(2, "b")]);
    }

    #[tokio::test]
    async fn test_run_reconciles_on_success() {
        let cell: StoreCell<Vec<i32>> = StoreCell::new();
        let value = cell
            .run("push", "Failed", async { Ok(5) }, |list, v| list.push(*v), |_| {})
            .await
            .unwrap();
        assert_eq!(value, 5);
        let snapshot = cell.snapshot().await;
        assert_eq!(snapshot.data, vec![5]);
        assert!(!snapshot.loading);
        assert_eq!(snapshot.error, None);
    }

    #[tokio::test]
    async fn test_run_records_error_and_keeps_cache() {
        let cell = StoreCell::from_data(vec![1, 2]);
        let result: AppResult<i32> = cell
            .run(
                "push",
                "Failed to push",
                async {
                    Err(AppError::Api {
                        status: 409,
                        message: Some("Duplicate".to_string()),
                    })
                },
                |list, v| list.push(*v),
                |_| {},
            )
            .await;
        assert!(result.is_err());
        let snapshot = cell.snapshot().await;
        assert_eq!(snapshot.data, vec![1, 2]);
        assert_eq!(snapshot.error.as_deref(), Some("Duplicate"));
        assert!(!snapshot.loading);
    }
}
