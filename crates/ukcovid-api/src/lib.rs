//! HTTP client for the UK coronavirus statistics API.
//!
//! [`StatsClient`] performs a single GET per invocation against the
//! public `data.gov.uk` endpoint, deserializes the JSON envelope into
//! domain [`ukcovid_core::Record`]s and captures the `Last-Modified`
//! response header as the authoritative "data as of" timestamp.
//! Retry policy lives with the caller; a failed fetch is simply
//! retried on the scheduler's next tick.

mod client;
mod error;
mod last_modified;
mod types;

pub use client::{FetchOutcome, StatsClient};
pub use error::ApiError;
pub use last_modified::parse_last_modified;
pub use types::{ResponsePayload, ResponseRecord};
