use std::time::Duration;

use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, Url};
use ukcovid_core::{AppConfig, Location, Record};

use crate::error::ApiError;
use crate::last_modified::parse_last_modified;
use crate::types::ResponsePayload;

/// The `structure` query parameter: maps the short response field
/// names to the source metrics. This is the canonical field mapping:
/// the by-publish-date case metrics and the 28-days-of-positive-test
/// death metrics.
const STRUCTURE: &str = concat!(
    r#"{"date":"date","cases":"newCasesByPublishDate","#,
    r#""cumCases":"cumCasesByPublishDate","#,
    r#""deaths":"newDeaths28DaysByPublishDate","#,
    r#""cumDeaths":"cumDeaths28DaysByPublishDate"}"#
);

/// Result of one successful fetch.
///
/// `records` is the full replacement series, newest-first as returned
/// by the source. `last_modified` is the raw header string (kept for
/// change detection against the persisted copy); `data_timestamp` is
/// its parsed form, `None` when the header is missing or unparseable.
#[derive(Debug)]
pub struct FetchOutcome {
    pub records: Vec<Record>,
    pub last_modified: Option<String>,
    pub data_timestamp: Option<DateTime<Utc>>,
}

/// Client for the coronavirus statistics REST API.
///
/// Use [`StatsClient::new`] for production or
/// [`StatsClient::with_base_url`] to point at a mock server in tests.
pub struct StatsClient {
    client: Client,
    base_url: Url,
}

impl StatsClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ApiError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with an explicit base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Same conditions as [`StatsClient::new`].
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches the full series for a location.
    ///
    /// One network call per invocation, no internal retries; a failed
    /// fetch is retried by the scheduler on its next tick. The caller
    /// applies the outcome; no global state is touched here.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on transport failure.
    /// - [`ApiError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ApiError::Deserialize`] if the body does not match the
    ///   expected envelope. A single malformed record fails the whole
    ///   decode; partial results are never returned.
    pub async fn fetch(&self, location: Location) -> Result<FetchOutcome, ApiError> {
        let url = self.request_url(location);
        tracing::debug!(%url, %location, "fetching statistics");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        // Grab the header before consuming the response body.
        let last_modified = response
            .headers()
            .get(reqwest::header::LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await?;
        let payload: ResponsePayload =
            serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
                context: format!("statistics for {location}"),
                source: e,
            })?;

        let records: Vec<Record> = payload.data.into_iter().map(Record::from).collect();
        let data_timestamp = last_modified.as_deref().and_then(parse_last_modified);

        tracing::debug!(
            count = records.len(),
            last_modified = last_modified.as_deref().unwrap_or("<absent>"),
            "statistics fetched"
        );

        Ok(FetchOutcome {
            records,
            last_modified,
            data_timestamp,
        })
    }

    /// Builds the request URL for a location.
    ///
    /// The `filters` expression is substituted verbatim (it carries its
    /// own pre-encoded space for "northern ireland"); the `structure`
    /// JSON is percent-encoded here.
    fn request_url(&self, location: Location) -> String {
        let structure = utf8_percent_encode(STRUCTURE, NON_ALPHANUMERIC);
        format!(
            "{}?filters={}&structure={structure}",
            self.base_url,
            location.api_filter()
        )
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
