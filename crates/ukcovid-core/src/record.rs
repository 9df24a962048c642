use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One reporting day of statistics for a single location.
///
/// The four counts are independently optional: the source publishes
/// metrics on different cadences, so any of them may be absent for a
/// given date. Absent is not the same as zero; conversion to `0`
/// happens only at aggregation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Reporting date (`yyyy-MM-dd` on the wire).
    pub date: NaiveDate,
    /// New cases by publish date.
    pub cases: Option<i64>,
    /// Cumulative cases by publish date.
    pub total_cases: Option<i64>,
    /// New deaths within 28 days of a positive test.
    pub deaths: Option<i64>,
    /// Cumulative deaths within 28 days of a positive test.
    pub total_deaths: Option<i64>,
}

/// An ordered run of daily records for one location, newest-first,
/// bounded by the source's ~1000-entry cap. Replaced wholesale on
/// each successful fetch.
pub type Series = Vec<Record>;
