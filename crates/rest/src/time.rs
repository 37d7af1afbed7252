//! Event-time normalization.
//!
//! Clients submit the `time` field in whatever shape their date picker
//! produces. The store's timestamp column holds one canonical shape, so
//! both the create and update paths funnel through the single
//! [`normalize_timestamp`] function here. Keeping one normalizer is what
//! guarantees the two write paths can never drift apart.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// The store's timestamp shape: zero-padded, local server time.
const STORE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted input shapes for naive (offset-less) date-times.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Normalizes a client-supplied date-time into `YYYY-MM-DD HH:MM:SS`.
///
/// Accepts RFC 3339 (offset-bearing input is converted to server-local
/// time), ISO-like naive date-times with optional fractional seconds
/// (taken as already local), and bare dates (midnight). Returns `None`
/// for anything unparseable.
pub fn normalize_timestamp(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Local).format(STORE_FORMAT).to_string());
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(naive.format(STORE_FORMAT).to_string());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).format(STORE_FORMAT).to_string());
    }

    None
}
