//! The foreground refresh driver: owns the client, the staleness
//! state and the current series, and funnels every trigger (manual
//! reload or periodic tick) through the single-fetch gate.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use ukcovid_api::StatsClient;
use ukcovid_core::{AppConfig, Location, Series};
use ukcovid_metrics::Snapshot;

use crate::state::FetchState;
use crate::status::status_line;

/// What the presentation layer reads: an immutable snapshot of the
/// derived metrics plus the rendered status text.
#[derive(Debug, Clone, Serialize)]
pub struct ViewState {
    pub snapshot: Snapshot,
    pub status: String,
    pub record_count: usize,
}

struct Inner {
    state: FetchState,
    series: Series,
    snapshot: Snapshot,
}

/// Refresh driver for one location's display.
///
/// All interior state sits behind a mutex that is never held across
/// an await point; the [`FetchState`] gate guarantees at most one
/// request in flight regardless of how many triggers race.
pub struct Refresher {
    client: StatsClient,
    tick_interval: Duration,
    inner: Mutex<Inner>,
}

impl Refresher {
    #[must_use]
    pub fn new(client: StatsClient, config: &AppConfig) -> Self {
        Refresher {
            client,
            tick_interval: Duration::from_secs(config.tick_interval_secs),
            inner: Mutex::new(Inner {
                state: FetchState::new(config),
                series: Series::new(),
                snapshot: Snapshot::derive(&[]),
            }),
        }
    }

    /// The current view state: polling accessor for the presentation
    /// layer.
    #[must_use]
    pub fn view(&self) -> ViewState {
        let inner = self.lock();
        ViewState {
            snapshot: inner.snapshot.clone(),
            status: status_line(&inner.state, Utc::now()),
            record_count: inner.series.len(),
        }
    }

    /// A copy of the staleness bookkeeping, for status inspection.
    #[must_use]
    pub fn fetch_state(&self) -> FetchState {
        self.lock().state.clone()
    }

    /// Manual reload: always fetches regardless of staleness, subject
    /// only to the in-flight gate. When `clear_data` is set the
    /// displayed series and metrics are dropped first (location
    /// switch), returning the view to its loading state.
    ///
    /// Returns `false` when the trigger was ignored because a fetch
    /// was already in flight.
    pub async fn reload(&self, location: Location, clear_data: bool) -> bool {
        {
            let mut inner = self.lock();
            if !inner.state.begin_fetch() {
                tracing::debug!(%location, "reload ignored, fetch already in flight");
                return false;
            }
            if clear_data {
                inner.series.clear();
                inner.snapshot = Snapshot::derive(&[]);
                inner.state.reset_data();
            }
        }
        self.fetch_and_apply(location).await;
        true
    }

    /// Periodic tick: fetches only when the state is stale and no
    /// request is already outstanding.
    ///
    /// Returns `true` when a fetch was attempted.
    pub async fn tick(&self, location: Location) -> bool {
        {
            let mut inner = self.lock();
            if !inner.state.should_refresh(Utc::now()) {
                return false;
            }
            // should_refresh excludes an in-flight fetch, so the gate
            // claim cannot fail here.
            inner.state.begin_fetch();
        }
        self.fetch_and_apply(location).await;
        true
    }

    /// Polling loop: ticks at the configured interval and invokes
    /// `on_update` with a fresh view after every attempted fetch.
    /// Ticks are serialized; one that lands while a fetch is still
    /// outstanding is a no-op via the gate.
    pub async fn run<F>(self: Arc<Self>, location: Location, mut on_update: F)
    where
        F: FnMut(&ViewState),
    {
        let mut ticker = tokio::time::interval(self.tick_interval);
        loop {
            ticker.tick().await;
            if self.tick(location).await {
                on_update(&self.view());
            }
        }
    }

    /// Performs the network call with the gate already claimed, then
    /// applies the outcome. On failure the previously displayed series
    /// and metrics are retained; only the status text changes.
    async fn fetch_and_apply(&self, location: Location) {
        let result = self.client.fetch(location).await;
        let now = Utc::now();
        let mut inner = self.lock();
        match result {
            Ok(outcome) => {
                tracing::info!(
                    %location,
                    records = outcome.records.len(),
                    "series replaced"
                );
                inner.snapshot = Snapshot::derive(&outcome.records);
                inner.series = outcome.records;
                inner.state.complete_success(now, outcome.data_timestamp);
            }
            Err(e) => {
                tracing::warn!(%location, error = %e, "fetch failed, keeping previous data");
                inner.state.complete_failure(now, e.to_string());
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("refresher state mutex poisoned")
    }
}

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod tests;
