//! Chart-ready normalization of a series.
//!
//! Raw counts are scaled into bounded ratios so the presentation layer
//! can plot them without knowing the magnitudes. Output is
//! chronological (oldest first, the reverse of storage order) and
//! always the same length as the input; truncation to a display
//! window is a separate step ([`tail`]).

use serde::Serialize;
use ukcovid_core::{ChartWindow, Record};

/// Headroom multiplier applied to the series maximum, so the tallest
/// point sits just below the top of the chart.
pub const HEADROOM: f64 = 1.05;

/// Extra divisor applied to the deaths series in emphasized mode,
/// keeping the numerically much smaller line visible on its own axis.
pub const EMPHASIS: f64 = 1.5;

/// Normalized series for the main chart view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Cases scaled by their own maximum.
    pub cases: Vec<f64>,
    /// Deaths scaled by the cases maximum, sharing the cases axis.
    pub deaths_relative: Vec<f64>,
    /// Deaths scaled by their own maximum times [`EMPHASIS`].
    pub deaths_emphasized: Vec<f64>,
}

/// Normalized series for the widget-style chart, where both lines
/// share a single axis derived from the larger of the two maxima.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedAxisChart {
    pub cases: Vec<f64>,
    pub deaths: Vec<f64>,
}

/// Derives the three standard projections from a newest-first series.
#[must_use]
pub fn derive(series: &[Record]) -> ChartData {
    let cases = chronological(series, |r| r.cases);
    let deaths = chronological(series, |r| r.deaths);

    let cases_scale = scale_of(&cases);
    let deaths_scale = scale_of(&deaths);

    ChartData {
        cases: divide(&cases, cases_scale),
        deaths_relative: divide(&deaths, cases_scale),
        deaths_emphasized: divide(&deaths, deaths_scale * EMPHASIS),
    }
}

/// Derives the shared-axis projection from a newest-first series.
#[must_use]
pub fn shared_axis(series: &[Record]) -> SharedAxisChart {
    let cases = chronological(series, |r| r.cases);
    let deaths = chronological(series, |r| r.deaths);

    let scale = scale_of(&cases).max(scale_of(&deaths));

    SharedAxisChart {
        cases: divide(&cases, scale),
        deaths: divide(&deaths, scale),
    }
}

/// The last `window` chronological points, or the whole slice when it
/// is shorter than the window.
#[must_use]
pub fn tail(values: &[f64], window: ChartWindow) -> &[f64] {
    let keep = window.points().min(values.len());
    &values[values.len() - keep..]
}

/// Raw values in chronological order, absent counts as 0.
#[allow(clippy::cast_precision_loss)]
fn chronological(series: &[Record], metric: impl Fn(&Record) -> Option<i64>) -> Vec<f64> {
    series
        .iter()
        .rev()
        .map(|r| metric(r).unwrap_or(0) as f64)
        .collect()
}

/// Scale for one series: max × headroom, or 1.0 when the series is
/// empty or all-zero so division never produces NaN.
fn scale_of(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * HEADROOM
    } else {
        1.0
    }
}

fn divide(values: &[f64], scale: f64) -> Vec<f64> {
    values.iter().map(|v| v / scale).collect()
}
