//! Wire types for the statistics API response.
//!
//! The endpoint returns `{"data": [ ... ]}` with entries shaped by the
//! `structure` query parameter. The short field names here mirror that
//! parameter's aliases; the underlying source metrics are the
//! publish-date variants named in the client's `structure` constant.

use serde::Deserialize;

use chrono::NaiveDate;
use ukcovid_core::Record;

/// Top-level envelope for the statistics response.
#[derive(Debug, Deserialize)]
pub struct ResponsePayload {
    pub data: Vec<ResponseRecord>,
}

/// One day of statistics as returned by the API, newest-first in the
/// envelope. Every count is defensively optional: the source omits or
/// nulls metrics that have not been published for a date. A field of
/// the wrong type fails the whole decode; partial records are not
/// accepted.
#[derive(Debug, Deserialize)]
pub struct ResponseRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub cases: Option<i64>,
    #[serde(default, rename = "cumCases")]
    pub cum_cases: Option<i64>,
    #[serde(default)]
    pub deaths: Option<i64>,
    #[serde(default, rename = "cumDeaths")]
    pub cum_deaths: Option<i64>,
}

impl From<ResponseRecord> for Record {
    fn from(raw: ResponseRecord) -> Self {
        Record {
            date: raw.date,
            cases: raw.cases,
            total_cases: raw.cum_cases,
            deaths: raw.deaths,
            total_deaths: raw.cum_deaths,
        }
    }
}
