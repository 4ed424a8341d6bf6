//! Calendar epochs relative to J2000.0.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use impact_core::constants::{DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY};

/// Unix timestamp of the J2000.0 epoch (2000-01-01 12:00 TT, treated as UTC).
pub const J2000_UNIX_SECONDS: i64 = 946_728_000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EpochError {
    #[error("failed to parse date '{0}' (expected YYYY-MM-DD)")]
    Parse(String),
}

/// Parse a `YYYY-MM-DD` calendar date into a UTC midnight instant.
pub fn parse_date(text: &str) -> Result<DateTime<Utc>, EpochError> {
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| EpochError::Parse(text.to_string()))?;
    date.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| EpochError::Parse(text.to_string()))
}

/// Current UTC instant, for callers that do not carry their own clock.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Days elapsed since J2000.0 (fractional, may be negative).
pub fn days_since_j2000(moment: DateTime<Utc>) -> f64 {
    (moment.timestamp() - J2000_UNIX_SECONDS) as f64 / SECONDS_PER_DAY
}

/// Julian day number of a UTC instant.
pub fn julian_day(moment: DateTime<Utc>) -> f64 {
    J2000_JD + days_since_j2000(moment)
}

/// Julian centuries elapsed since J2000.0, the secular-rate time base.
pub fn centuries_since_j2000(moment: DateTime<Utc>) -> f64 {
    days_since_j2000(moment) / DAYS_PER_CENTURY
}

/// Fractional days from `from` to `to`.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to.timestamp() - from.timestamp()) as f64 / SECONDS_PER_DAY
}
