//! Time utilities: parsing HH:MM, minute arithmetic, hour truncation.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

/// Storage format for check-in timestamps (minute precision, local time).
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FMT).ok()
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FMT).to_string()
}

/// Drop seconds and sub-second precision; check-ins are tracked per minute.
pub fn truncate_to_minute(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

/// Start of the hour containing `ts` (minutes and seconds zeroed).
pub fn truncate_to_hour(ts: NaiveDateTime) -> NaiveDateTime {
    ts.date()
        .and_hms_opt(ts.hour(), 0, 0)
        .unwrap_or_else(|| truncate_to_minute(ts))
}

pub fn minutes(n: i64) -> Duration {
    Duration::minutes(n)
}
