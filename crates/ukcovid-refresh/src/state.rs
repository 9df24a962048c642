//! Fetch/staleness state for one location's refresh cycle.

use chrono::{DateTime, Duration, Utc};
use ukcovid_core::AppConfig;

/// Sentinel for "never happened". Anything compared against it falls
/// past every staleness threshold.
#[must_use]
pub fn distant_past() -> DateTime<Utc> {
    DateTime::<Utc>::MIN_UTC
}

/// Observable phase of the refresh cycle at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Have data, not yet due for a re-fetch.
    Idle,
    /// The last check is old enough that a re-fetch is due.
    Stale,
    /// A request is in flight.
    Fetching,
}

/// Staleness bookkeeping for one location.
///
/// `last_updated` tracks the source data timestamp (from the response
/// header); `last_checked` tracks local attempt completions, success
/// and failure alike. Both start at the distant-past sentinel.
#[derive(Debug, Clone)]
pub struct FetchState {
    pub last_updated: DateTime<Utc>,
    pub last_checked: DateTime<Utc>,
    pub last_error: Option<String>,
    fetching: bool,
    stale_after: Duration,
    initial_after: Duration,
}

impl FetchState {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self::with_thresholds(
            duration_secs(config.stale_after_secs),
            duration_secs(config.initial_after_secs),
        )
    }

    #[must_use]
    pub fn with_thresholds(stale_after: Duration, initial_after: Duration) -> Self {
        FetchState {
            last_updated: distant_past(),
            last_checked: distant_past(),
            last_error: None,
            fetching: false,
            stale_after,
            initial_after,
        }
    }

    #[must_use]
    pub fn phase(&self, now: DateTime<Utc>) -> Phase {
        if self.fetching {
            Phase::Fetching
        } else if self.is_stale(now) {
            Phase::Stale
        } else {
            Phase::Idle
        }
    }

    /// Whether the last check is old enough to warrant a re-fetch.
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.last_checked) >= self.stale_after
    }

    /// Whether the system has effectively never loaded: the source
    /// data timestamp is older than the long-stale horizon, which the
    /// distant-past sentinel always is.
    #[must_use]
    pub fn is_loading(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.last_updated) > self.initial_after
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    /// The tick predicate: stale and no request already in flight.
    #[must_use]
    pub fn should_refresh(&self, now: DateTime<Utc>) -> bool {
        !self.fetching && self.is_stale(now)
    }

    /// Claims the fetch gate. Returns `false` when a fetch is already
    /// in flight; the caller must treat the trigger as a no-op.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetching {
            return false;
        }
        self.fetching = true;
        true
    }

    /// Records a successful fetch. `data_timestamp` is the parsed
    /// response header; when the header was missing or unparseable the
    /// previous `last_updated` is deliberately left in place.
    pub fn complete_success(&mut self, now: DateTime<Utc>, data_timestamp: Option<DateTime<Utc>>) {
        self.fetching = false;
        self.last_checked = now;
        self.last_error = None;
        if let Some(ts) = data_timestamp {
            self.last_updated = ts;
        }
    }

    /// Records a failed attempt: the attempt time advances, the error
    /// message is retained for display, `last_updated` is untouched.
    pub fn complete_failure(&mut self, now: DateTime<Utc>, message: String) {
        self.fetching = false;
        self.last_checked = now;
        self.last_error = Some(message);
    }

    /// Drops the data timestamp back to the sentinel, returning the
    /// display to its initial loading state. Used by a manual reload
    /// that clears displayed data.
    pub fn reset_data(&mut self) {
        self.last_updated = distant_past();
        self.last_error = None;
    }
}

/// Converts a configured second count into a `Duration`, saturating
/// rather than panicking on absurdly large values.
fn duration_secs(secs: u64) -> Duration {
    i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX)
}
