//! Derived metrics over a daily statistics series.
//!
//! Everything in this crate is a pure function of its input series:
//! no I/O, no clocks, no shared state. Callers re-derive a fresh
//! [`Snapshot`] whenever the underlying series is replaced.

pub mod chart;
pub mod format;
pub mod notify;
pub mod summary;

use serde::Serialize;
use ukcovid_core::Record;

pub use chart::{ChartData, SharedAxisChart};
pub use notify::Notification;
pub use summary::{DailyFigures, Delta, Summary, Totals, WeeklyFigures, WeeklyMetric};

/// Immutable snapshot of everything the presentation layer renders:
/// the summary block plus chart-ready normalized series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub summary: Summary,
    pub chart: ChartData,
}

impl Snapshot {
    /// Derives a snapshot from a newest-first series.
    #[must_use]
    pub fn derive(series: &[Record]) -> Self {
        Snapshot {
            summary: summary::derive(series),
            chart: chart::derive(series),
        }
    }
}
