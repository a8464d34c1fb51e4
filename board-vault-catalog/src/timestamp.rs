//! Parsing and formatting of play timestamps.
//!
//! Timestamps are local wall-clock times with second precision, stored as
//! `YYYY-MM-DD HH:MM:SS` so that text order is chronological order.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SubsecRound};

use crate::CatalogError;

/// Storage format for `played_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date/time layouts accepted from import files, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    TIMESTAMP_FORMAT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// The current moment, truncated to whole seconds.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp in any of the accepted layouts.
///
/// A bare date means midnight. RFC 3339 values with an offset are converted
/// to local time. Fractional seconds are dropped.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, CatalogError> {
    let s = input.trim();

    for fmt in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ts.trunc_subsecs(0));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local).naive_local().trunc_subsecs(0));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(ts) = date.and_hms_opt(0, 0, 0) {
            return Ok(ts);
        }
    }

    Err(CatalogError::InvalidTimestamp(input.to_string()))
}
