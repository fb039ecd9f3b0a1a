use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};

/// Stored timestamp format, e.g. "2024-06-05 18:42:07".
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Grouping key format, e.g. "2024-06-05".
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
/// Section header format, e.g. "June 5, 2024".
pub const DISPLAY_FORMAT: &str = "%B %-d, %Y";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Date part of a stored timestamp: the text before the first space.
pub fn date_key(timestamp: &str) -> &str {
    timestamp
        .split_once(' ')
        .map(|(day, _)| day)
        .unwrap_or(timestamp)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_KEY_FORMAT).ok()
}

pub fn display_date(d: NaiveDate) -> String {
    d.format(DISPLAY_FORMAT).to_string()
}

/// "2024-06-05" → "June 5, 2024"
pub fn format_display_date(date_key: &str) -> AppResult<String> {
    parse_date(date_key)
        .map(display_date)
        .ok_or_else(|| AppError::InvalidDate(date_key.to_string()))
}

/// Full weekday name for a date key ("Wednesday").
pub fn weekday_name(date_key: &str) -> AppResult<String> {
    parse_date(date_key)
        .map(|d| d.format("%A").to_string())
        .ok_or_else(|| AppError::InvalidDate(date_key.to_string()))
}
