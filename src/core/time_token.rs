//! Lenient time token parsing and formatting.
//!
//! Tokens come in two display conventions: `HH:MM AM|PM` and `HH:MM`.
//! Everything here is forgiving on purpose: a half-typed or malformed token
//! degrades to `0` (or to the 09:00 default for the converters) instead of
//! failing. Strict validation for imported text lives in `core::extract`.

use crate::models::clock_format::ClockFormat;
use crate::utils::time::now_minutes;

pub const MINUTES_PER_DAY: i64 = 24 * 60;
pub const LAST_MINUTE: i64 = MINUTES_PER_DAY - 1;

const DEFAULT_TOKEN_24H: &str = "09:00";
const DEFAULT_TOKEN_12H: &str = "09:00 AM";
const DEFAULT_HOUR: i64 = 9;

/// Numeric component of a token; anything unparseable becomes `fallback`.
///
/// Bounded to one day of minutes either way so the hour arithmetic that
/// follows cannot overflow.
fn lenient_number(part: Option<&str>, fallback: i64) -> i64 {
    part.and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(fallback)
        .clamp(-MINUTES_PER_DAY, MINUTES_PER_DAY)
}

/// Split `"HH:MM AM"` into `(hours, minutes, meridiem)`.
fn split_token(value: &str, hour_fallback: i64) -> (i64, i64, Option<String>) {
    let mut words = value.split_whitespace();
    let time = words.next().unwrap_or("");
    let period = words.next().map(|p| p.to_uppercase());

    let mut hm = time.split(':');
    let hours = lenient_number(hm.next(), hour_fallback);
    let minutes = lenient_number(hm.next(), 0);

    (hours, minutes, period)
}

/// Apply an `AM`/`PM` marker to a 12-hour value. Unknown markers are ignored.
fn apply_meridiem(hours: i64, period: Option<&str>) -> i64 {
    match period {
        Some("PM") if hours != 12 => hours + 12,
        Some("AM") if hours == 12 => 0,
        _ => hours,
    }
}

/// A token carries a meridiem when it has an inner space (`"09:00 AM"`).
pub fn has_meridiem(value: &str) -> bool {
    value.trim().contains(' ')
}

/// Minutes since midnight for a display token, always within `[0, 1439]`.
///
/// `"06:00 PM"` → 1080, `"18:00"` → 1080, `"12:30 AM"` → 30, `"xx:yy"` → 0.
pub fn parse_to_minutes(value: &str) -> i64 {
    if value.trim().is_empty() {
        return 0;
    }

    let (hours, minutes, period) = split_token(value, 0);
    let hours = apply_meridiem(hours, period.as_deref());

    (hours * 60 + minutes).clamp(0, LAST_MINUTE)
}

/// Convert to `HH:MM`. Tokens without a meridiem are returned unchanged.
pub fn to_twenty_four_hour(value: &str) -> String {
    if value.is_empty() {
        return DEFAULT_TOKEN_24H.to_string();
    }
    if !has_meridiem(value) {
        return value.to_string();
    }

    let (hours, minutes, period) = split_token(value, DEFAULT_HOUR);
    let hours = apply_meridiem(hours, period.as_deref());

    format!("{:02}:{:02}", hours, minutes)
}

/// Convert to `HH:MM AM|PM`. Tokens already carrying a meridiem are returned unchanged.
pub fn to_twelve_hour(value: &str) -> String {
    if value.is_empty() {
        return DEFAULT_TOKEN_12H.to_string();
    }
    if has_meridiem(value) {
        return value.to_string();
    }

    let (mut hours, minutes, _) = split_token(value, DEFAULT_HOUR);
    let ampm = if hours >= 12 { "PM" } else { "AM" };
    if hours > 12 {
        hours -= 12;
    }
    if hours == 0 {
        hours = 12;
    }

    format!("{:02}:{:02} {}", hours, minutes, ampm)
}

/// Render minutes since midnight in the requested convention.
pub fn format_token(minutes: i64, clock: ClockFormat) -> String {
    let m = minutes.clamp(0, LAST_MINUTE);
    let (h, mm) = (m / 60, m % 60);

    match clock {
        ClockFormat::TwentyFourHour => format!("{:02}:{:02}", h, mm),
        ClockFormat::TwelveHour => {
            let ampm = if h >= 12 { "PM" } else { "AM" };
            let h12 = if h % 12 == 0 { 12 } else { h % 12 };
            format!("{:02}:{:02} {}", h12, mm, ampm)
        }
    }
}

/// Lenient parse followed by canonical formatting: what a time picker commits.
pub fn canonicalize(value: &str, clock: ClockFormat) -> String {
    format_token(parse_to_minutes(value), clock)
}

/// The current wall-clock minute as a display token.
pub fn format_now(clock: ClockFormat) -> String {
    format_token(now_minutes(), clock)
}
