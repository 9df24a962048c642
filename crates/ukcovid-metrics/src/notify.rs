//! Notification text for the "new data published" trigger.

use ukcovid_core::Record;

use crate::format::{thousands, title_date};
use crate::summary;

/// Title and body of a "latest update" notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    /// The concatenated form used for duplicate suppression.
    #[must_use]
    pub fn dedup_key(&self) -> String {
        format!("{}{}", self.title, self.body)
    }
}

/// Builds the notification for the newest day of a series.
///
/// Returns `None` for an empty series. Day-over-day deltas appear
/// only when both days carry a published value.
#[must_use]
pub fn latest_update(series: &[Record]) -> Option<Notification> {
    let newest = series.first()?;
    let summary = summary::derive(series);

    let title = format!("Latest update for {}", title_date(newest.date));

    let cases_change = summary
        .daily
        .cases_change
        .map(summary::Delta::label)
        .unwrap_or_default();
    let deaths_change = summary
        .daily
        .deaths_change
        .map(summary::Delta::label)
        .unwrap_or_default();

    let body = format!(
        "😷 {}{} cases, {} total\n💀 {}{} deaths, {} total",
        thousands(summary.daily.cases),
        cases_change,
        summary.totals.cases_label(),
        thousands(summary.daily.deaths),
        deaths_change,
        summary.totals.deaths_label(),
    );

    Some(Notification { title, body })
}
