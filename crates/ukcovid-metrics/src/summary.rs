//! Summary figures derived from a newest-first series: daily counts,
//! day-over-day deltas, weekly aggregates with week-over-week change,
//! and cumulative totals.

use chrono::NaiveDate;
use serde::Serialize;
use ukcovid_core::Record;

use crate::format::{round1, thousands};

/// Number of newest records that must be present before weekly
/// figures are computed: the current week plus the comparison week.
const WEEKLY_MIN_RECORDS: usize = 14;

/// A signed day-over-day or week-over-week difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Delta {
    pub difference: i64,
}

impl Delta {
    /// Renders the parenthesised change suffix, e.g. `" (+20)"`.
    ///
    /// The sign is `+` for any non-negative difference.
    #[must_use]
    pub fn label(self) -> String {
        format!(
            " ({}{})",
            sign_of(self.difference),
            thousands(self.difference.abs())
        )
    }
}

/// Newest day's counts with optional day-over-day deltas.
///
/// Counts default to `0` for display when the source has not
/// published them. A delta is present only when both days of the
/// comparison carry a published value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyFigures {
    pub cases: i64,
    pub deaths: i64,
    pub cases_change: Option<Delta>,
    pub deaths_change: Option<Delta>,
}

/// One metric's weekly aggregate and its change against the prior week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyMetric {
    /// Sum over the 7 newest days, absent counts treated as 0.
    pub total: i64,
    /// This week minus the prior week (days 8-14).
    pub difference: i64,
    /// `abs(difference) / prior_week * 100`, rounded to 1 decimal
    /// place. `None` when the prior week's total is zero; the
    /// percentage is suppressed rather than rendered as NaN/∞.
    pub percent_change: Option<f64>,
}

impl WeeklyMetric {
    /// Renders the change suffix, e.g. `" (+123, +4.5%)"`, or
    /// `" (+123)"` when the percentage is suppressed.
    #[must_use]
    pub fn change_label(&self) -> String {
        let sign = sign_of(self.difference);
        let amount = thousands(self.difference.abs());
        match self.percent_change {
            Some(pct) => format!(" ({sign}{amount}, {sign}{pct:.1}%)"),
            None => format!(" ({sign}{amount})"),
        }
    }

    /// The weekly total with separators.
    #[must_use]
    pub fn total_label(&self) -> String {
        thousands(self.total)
    }
}

/// Weekly aggregates for both metrics. Only derived when the series
/// is long enough to hold the full comparison fortnight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyFigures {
    pub cases: WeeklyMetric,
    pub deaths: WeeklyMetric,
}

/// Cumulative totals from the newest record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub cases: Option<i64>,
    pub deaths: Option<i64>,
}

impl Totals {
    #[must_use]
    pub fn cases_label(self) -> String {
        self.cases.map_or_else(|| "0".to_owned(), thousands)
    }

    #[must_use]
    pub fn deaths_label(self) -> String {
        self.deaths.map_or_else(|| "0".to_owned(), thousands)
    }
}

/// The full summary block for one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub latest_date: Option<NaiveDate>,
    pub daily: DailyFigures,
    /// `None` when the series holds 14 records or fewer; callers keep
    /// whatever weekly text they were already showing.
    pub weekly: Option<WeeklyFigures>,
    pub totals: Totals,
}

/// Derives the summary from a newest-first series.
#[must_use]
pub fn derive(series: &[Record]) -> Summary {
    let newest = series.first();

    let daily = DailyFigures {
        cases: newest.and_then(|r| r.cases).unwrap_or(0),
        deaths: newest.and_then(|r| r.deaths).unwrap_or(0),
        cases_change: daily_delta(series, |r| r.cases),
        deaths_change: daily_delta(series, |r| r.deaths),
    };

    let totals = Totals {
        cases: newest.and_then(|r| r.total_cases),
        deaths: newest.and_then(|r| r.total_deaths),
    };

    Summary {
        latest_date: newest.map(|r| r.date),
        daily,
        weekly: weekly_figures(series),
        totals,
    }
}

/// Day-over-day delta for one metric; `None` unless both the newest
/// and second-newest records carry a published value.
fn daily_delta(series: &[Record], metric: impl Fn(&Record) -> Option<i64>) -> Option<Delta> {
    let newest = metric(series.first()?)?;
    let previous = metric(series.get(1)?)?;
    Some(Delta {
        difference: newest - previous,
    })
}

fn weekly_figures(series: &[Record]) -> Option<WeeklyFigures> {
    if series.len() <= WEEKLY_MIN_RECORDS {
        return None;
    }
    Some(WeeklyFigures {
        cases: weekly_metric(series, |r| r.cases),
        deaths: weekly_metric(series, |r| r.deaths),
    })
}

/// Weekly aggregate for one metric over the 14 newest records.
///
/// `prior_week` falls out of the fortnight sum, so the 14-day sum
/// always decomposes exactly into this week plus the prior week.
fn weekly_metric(series: &[Record], metric: impl Fn(&Record) -> Option<i64>) -> WeeklyMetric {
    let sum = |days: usize| -> i64 {
        series
            .iter()
            .take(days)
            .map(|r| metric(r).unwrap_or(0))
            .sum()
    };

    let this_week = sum(7);
    let fortnight = sum(14);
    let prior_week = fortnight - this_week;
    let difference = this_week - prior_week;

    #[allow(clippy::cast_precision_loss)]
    let percent_change = (prior_week != 0)
        .then(|| round1(difference.abs() as f64 / prior_week as f64 * 100.0));

    WeeklyMetric {
        total: this_week,
        difference,
        percent_change,
    }
}

fn sign_of(difference: i64) -> char {
    if difference < 0 {
        '-'
    } else {
        '+'
    }
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
