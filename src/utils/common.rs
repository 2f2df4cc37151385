//! Common utility functions

use chrono::{DateTime, SecondsFormat, Utc};

/// Convert DateTime to the ISO-8601 text stored in `journals.date`
///
/// Always UTC with millisecond precision and a `Z` suffix, so stored values
/// sort lexicographically in chronological order.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored ISO-8601 timestamp
///
/// Accepts any RFC 3339 offset and normalizes it to UTC.
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Get current UTC datetime
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Current time formatted for `journals.date`
pub fn now_timestamp() -> String {
    format_datetime(&now())
}

/// Round to one decimal place, halves away from zero
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
