use chrono::{Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Wall clock, truncated to minute precision like every stored timestamp.
pub fn now() -> NaiveDateTime {
    super::time::truncate_to_minute(Local::now().naive_local())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
