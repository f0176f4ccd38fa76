//! Bulk text / uploaded file → punch in/out rows.
//!
//! One pair per line, the two times separated by comma, tab, or plain
//! whitespace. Every token goes through [`normalize_strict`]; a line that
//! does not yield two valid times is dropped without a per-line report.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

static COLON_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2})\s*:\s*(\d{1,2})\s*(AM|PM)?").expect("valid colon time pattern")
});

static COMPACT_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{3,4})$").expect("valid compact time pattern"));

static TRAILING_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)\s+(\d{1,2}\s*:?\s*\d{1,2}(?:\s*[AP]M)?)\s*$")
        .expect("valid trailing time pattern")
});

/// A validated pair, both sides in 12-hour display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedRow {
    pub in_time: String,
    pub out_time: String,
}

/// Where the text came from; only changes the wording of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSource {
    Bulk,
    Upload,
}

const BULK_EMPTY_MSG: &str = "Enter punch in and punch out times (one pair per line).";
const BULK_NO_ROWS_MSG: &str = "No valid rows found. Use one line per pair: punch in, punch out (e.g. 9:00, 5:00 or 09:00 AM, 05:00 PM).";
const UPLOAD_NO_ROWS_MSG: &str = "No valid punch in/out rows found. Use CSV or tab-separated: time1, time2 per line (e.g. 9:00 AM, 5:00 PM or 09:00, 17:00).";

/// Strictly validate one token and render it as `HH:MM AM|PM`.
///
/// Accepts `H:MM` / `HH:MM` with an optional meridiem, or a compact 3–4
/// digit clock (`930`, `1500`). Minutes are clamped to `[0, 59]`; an hour
/// outside `[0, 23]` rejects the whole token.
pub fn normalize_strict(token: &str) -> Option<String> {
    let trimmed = token.trim();

    let (hours24, minutes) = if let Some(c) = COLON_TIME.captures(trimmed) {
        let mut h: i64 = c[1].parse().ok()?;
        let m: i64 = c[2].parse().ok()?;
        match c.get(3).map(|p| p.as_str().to_uppercase()).as_deref() {
            Some("AM") if h == 12 => h = 0,
            Some("PM") if h != 12 => h += 12,
            _ => {}
        }
        (h, m)
    } else if let Some(c) = COMPACT_TIME.captures(trimmed) {
        let digits = &c[1];
        let split = digits.len() - 2;
        let h: i64 = digits[..split].parse().ok()?;
        let m: i64 = digits[split..].parse().ok()?;
        (h, m)
    } else {
        return None;
    };

    let minutes = minutes.clamp(0, 59);
    if !(0..=23).contains(&hours24) {
        return None;
    }

    let hours12 = if hours24 % 12 == 0 { 12 } else { hours24 % 12 };
    let ampm = if hours24 >= 12 { "PM" } else { "AM" };

    Some(format!("{:02}:{:02} {}", hours12, minutes, ampm))
}

/// Split one line into its in/out parts, or `None` if it has no two times.
pub fn split_line(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let fields: Vec<&str> = trimmed
        .split([',', '\t'])
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();

    match fields.as_slice() {
        [first, second, ..] => Some((first.to_string(), second.to_string())),
        [single] => TRAILING_TIME
            .captures(single)
            .map(|c| (c[1].trim().to_string(), c[2].trim().to_string())),
        [] => None,
    }
}

/// Every valid pair in `text`, in line order. Empty when nothing matches.
pub fn extract_rows(text: &str) -> Vec<ExtractedRow> {
    let mut rows = Vec::new();

    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let Some((raw_in, raw_out)) = split_line(line) else {
            debug!(line = n + 1, "no time pair on line");
            continue;
        };

        match (normalize_strict(&raw_in), normalize_strict(&raw_out)) {
            (Some(in_time), Some(out_time)) => rows.push(ExtractedRow { in_time, out_time }),
            _ => debug!(line = n + 1, %raw_in, %raw_out, "dropping line with invalid time"),
        }
    }

    rows
}

/// Extraction for callers that need at least one row.
pub fn require_rows(text: &str, source: RowSource) -> AppResult<Vec<ExtractedRow>> {
    if source == RowSource::Bulk && text.trim().is_empty() {
        return Err(AppError::EmptyBulkInput(BULK_EMPTY_MSG.to_string()));
    }

    let rows = extract_rows(text);
    if rows.is_empty() {
        let msg = match source {
            RowSource::Bulk => BULK_NO_ROWS_MSG,
            RowSource::Upload => UPLOAD_NO_ROWS_MSG,
        };
        return Err(AppError::NoValidRows(msg.to_string()));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_accepts_colon_and_compact_forms() {
        assert_eq!(normalize_strict("9:00 AM").as_deref(), Some("09:00 AM"));
        assert_eq!(normalize_strict("17:00").as_deref(), Some("05:00 PM"));
        assert_eq!(normalize_strict("12:15 am").as_deref(), Some("12:15 AM"));
        assert_eq!(normalize_strict("00:05").as_deref(), Some("12:05 AM"));
        assert_eq!(normalize_strict("1500").as_deref(), Some("03:00 PM"));
        assert_eq!(normalize_strict("930").as_deref(), Some("09:30 AM"));
        assert_eq!(normalize_strict(" 9 : 45 pm ").as_deref(), Some("09:45 PM"));
    }

    #[test]
    fn strict_rejects_out_of_range_hours() {
        assert_eq!(normalize_strict("2500"), None);
        assert_eq!(normalize_strict("24:00"), None);
        assert_eq!(normalize_strict("13:00 PM"), None);
        assert_eq!(normalize_strict("notatime"), None);
        assert_eq!(normalize_strict("93"), None);
        assert_eq!(normalize_strict(""), None);
    }

    #[test]
    fn strict_clamps_minutes() {
        assert_eq!(normalize_strict("10:75").as_deref(), Some("10:59 AM"));
        assert_eq!(normalize_strict("1099").as_deref(), Some("10:59 AM"));
    }

    #[test]
    fn splits_on_comma_tab_or_whitespace() {
        assert_eq!(
            split_line("9:00 AM, 5:00 PM"),
            Some(("9:00 AM".into(), "5:00 PM".into()))
        );
        assert_eq!(
            split_line("09:00\t17:00\textra"),
            Some(("09:00".into(), "17:00".into()))
        );
        assert_eq!(
            split_line("10:25 12:25"),
            Some(("10:25".into(), "12:25".into()))
        );
        assert_eq!(
            split_line("9:00 AM 5:00 PM"),
            Some(("9:00 AM".into(), "5:00 PM".into()))
        );
        assert_eq!(split_line("930 1700"), Some(("930".into(), "1700".into())));
        assert_eq!(split_line("   "), None);
        assert_eq!(split_line("notaline"), None);
    }

    #[test]
    fn drops_invalid_lines() {
        let rows = extract_rows("9:00 AM, 5:00 PM\n09:00,17:00\nnotaline");
        assert_eq!(
            rows,
            vec![
                ExtractedRow {
                    in_time: "09:00 AM".into(),
                    out_time: "05:00 PM".into()
                },
                ExtractedRow {
                    in_time: "09:00 AM".into(),
                    out_time: "05:00 PM".into()
                },
            ]
        );
    }

    #[test]
    fn handles_crlf_and_blank_lines() {
        let rows = extract_rows("\r\n08:30,12:00\r\n\r\n1300,2500\r\n13:00,17:30\r\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].out_time, "05:30 PM");
    }

    #[test]
    fn require_rows_reports_aggregate_failure() {
        assert!(matches!(
            require_rows("   ", RowSource::Bulk),
            Err(AppError::EmptyBulkInput(_))
        ));
        assert!(matches!(
            require_rows("garbage", RowSource::Upload),
            Err(AppError::NoValidRows(msg)) if msg.contains("CSV or tab-separated")
        ));
        assert_eq!(require_rows("930,1500", RowSource::Bulk).unwrap().len(), 1);
    }
}
