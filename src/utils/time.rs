//! Clock sampling: current minute of the day and epoch milliseconds.

use chrono::{Local, NaiveDate, Timelike, Utc};

/// Minutes since local midnight, sampled now.
pub fn now_minutes() -> i64 {
    let now = Local::now();
    (now.hour() * 60 + now.minute()) as i64
}

/// Epoch milliseconds, used for the `savedAt` stamp of the state file.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn hours_to_millis(hours: u64) -> i64 {
    (hours as i64) * 60 * 60 * 1000
}

/// Local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
