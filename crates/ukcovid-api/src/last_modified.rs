//! Parsing of the `Last-Modified` response header.
//!
//! The source has emitted two shapes over time: standard RFC 1123
//! (`Tue, 05 Jan 2021 16:00:02 GMT`) and a full-weekday variant
//! (`Tuesday, 05 Jan 2021 16:00:02 GMT`). Both are accepted; anything
//! else yields `None`, and the caller leaves its previous data
//! timestamp untouched.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parses a `Last-Modified`-style header value into a UTC instant.
#[must_use]
pub fn parse_last_modified(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    // Full weekday names fall outside RFC 2822. The header is always
    // GMT/UTC, so strip the zone suffix and read the rest as UTC.
    let stripped = trimmed
        .strip_suffix(" GMT")
        .or_else(|| trimmed.strip_suffix(" UTC"))?;
    NaiveDateTime::parse_from_str(stripped, "%A, %d %b %Y %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}
