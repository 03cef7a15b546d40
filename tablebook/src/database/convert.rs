//! Conversions between domain values and their `SQLite` column encodings.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rusqlite::types::Type;

use crate::reservation::TIME_FORMAT;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Encodes a date as `YYYY-MM-DD`, which sorts chronologically as text.
pub(super) fn date_to_sql(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(super) fn date_from_sql(idx: usize, value: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub(super) fn time_to_sql(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub(super) fn time_from_sql(idx: usize, value: &str) -> rusqlite::Result<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Current time as Unix epoch seconds.
pub(super) fn now_unix_secs() -> i64 {
    Utc::now().timestamp()
}

pub(super) fn unix_secs_to_datetime(idx: usize, secs: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, secs))
}
