//! Single-shot background refresh: fetch, detect a data change via
//! the `Last-Modified` string, and fire the outbound triggers.
//!
//! Independent of the foreground [`crate::Refresher`]; the only
//! thing the two share is the on-disk store.

use thiserror::Error;
use ukcovid_api::{ApiError, StatsClient};
use ukcovid_core::Location;
use ukcovid_metrics::{notify, Notification};

use crate::store::{StateStore, StoreError};

/// Outbound side effects consumed by the presentation layer: the
/// widget-timeline reload and the local notification. Both fire only
/// when the fetched `Last-Modified` string differs from the stored
/// one.
pub trait UpdateSink {
    fn reload_views(&self);
    fn notify(&self, notification: &Notification);
}

/// Errors from a background refresh run.
#[derive(Debug, Error)]
pub enum BackgroundError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What a background run concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundResult {
    /// The response carried no usable `Last-Modified` string; nothing
    /// was persisted or triggered.
    NoTimestamp,
    /// Same data as last time; no triggers fired.
    Unchanged,
    /// New data: views reloaded, and `notified` says whether a
    /// notification was posted (suppressed when its content matched
    /// the previous one).
    Updated { notified: bool },
}

/// Runs one background refresh cycle.
///
/// # Errors
///
/// Returns [`BackgroundError::Api`] when the fetch fails (the store
/// is left untouched) and [`BackgroundError::Store`] when the updated
/// state cannot be persisted.
pub async fn run_background_refresh(
    client: &StatsClient,
    store: &StateStore,
    location: Location,
    sink: &dyn UpdateSink,
) -> Result<BackgroundResult, BackgroundError> {
    let outcome = client.fetch(location).await?;

    let Some(last_modified) = outcome.last_modified else {
        tracing::info!(%location, "background refresh: no last-modified header, skipping");
        return Ok(BackgroundResult::NoTimestamp);
    };

    let mut persisted = store.load()?;
    if persisted.last_modified == last_modified {
        tracing::info!(%location, "background refresh: data unchanged");
        return Ok(BackgroundResult::Unchanged);
    }

    let mut notified = false;
    if let Some(notification) = notify::latest_update(&outcome.records) {
        if notification.dedup_key() != persisted.last_notification {
            sink.notify(&notification);
            persisted.last_notification = notification.dedup_key();
            notified = true;
        }
    }
    sink.reload_views();

    persisted.last_modified = last_modified;
    store.save(&persisted)?;

    tracing::info!(%location, notified, "background refresh: new data published");
    Ok(BackgroundResult::Updated { notified })
}

#[cfg(test)]
#[path = "background_test.rs"]
mod tests;
