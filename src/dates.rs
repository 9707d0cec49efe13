//! Date parsing and normalization
//!
//! Dates reach the dashboard in several shapes: ISO dates, RFC 3339 timestamps,
//! HTTP dates written by the data server, and the formats of the raw Brent CSV.
//! Everything is reduced to a calendar date and printed as `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// Canonical output format for normalized dates.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Date-only layouts, tried in order after the canonical one.
const DATE_FORMATS: &[&str] = &["%d-%b-%y", "%d-%b-%Y", "%b %d, %Y", "%m/%d/%Y"];

/// Naive timestamp layouts. The time part is discarded.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized date: {input:?}")]
pub struct DateParseError {
    pub input: String,
}

/// Parses a date-like string into a calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, CANONICAL_FORMAT) {
        return Ok(date);
    }
    // Offsets are folded into UTC before the date is taken.
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    Err(DateParseError {
        input: input.to_string(),
    })
}

/// Formats a date in the canonical `YYYY-MM-DD` layout.
pub fn format_date(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

/// Normalizes a date-like string to `YYYY-MM-DD`.
///
/// Input that does not parse is returned unchanged.
pub fn normalize_date(input: &str) -> String {
    match parse_date(input) {
        Ok(date) => format_date(date),
        Err(err) => err.input,
    }
}

/// Normalizes a JSON date value as received from the API.
///
/// Strings go through [`normalize_date`], numbers are epoch milliseconds,
/// `null` becomes the empty string and anything else is kept as its JSON text.
pub fn normalize_date_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => normalize_date(s),
        serde_json::Value::Number(n) => {
            let millis = n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            });
            millis
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .map(|dt| format_date(dt.date_naive()))
                .unwrap_or_else(|| n.to_string())
        }
        other => other.to_string(),
    }
}
