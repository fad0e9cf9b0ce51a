//! Utilities for date and time formatting
//!
//! The API stores scrape times as SQLite `CURRENT_TIMESTAMP` values
//! (`2024-03-15 14:02:26`, UTC without offset) but may also send ISO 8601.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use std::fmt;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Parse an API timestamp; values without an offset are taken as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Format an API timestamp in `tz` as `DD/MM/YYYY, HH:MM:SS`.
/// Unparsable input is returned as is.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match parse_timestamp(raw) {
        Some(dt) => dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Format an API timestamp in the browser's local time zone
pub fn format_local_datetime(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}
