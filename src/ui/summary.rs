//! Rendering of the punch log and its computed totals.

use crate::core::extract::ExtractedRow;
use crate::core::time_token::{format_token, to_twenty_four_hour, to_twelve_hour};
use crate::models::clock_format::ClockFormat;
use crate::models::day_summary::DaySummary;
use crate::models::session::{PunchOut, Session};
use crate::utils::formatting::{bold, format_duration, format_remaining, pad_right};
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

const LABEL_WIDTH: usize = 18;

fn display_token(token: &str, clock: ClockFormat) -> String {
    match clock {
        ClockFormat::TwelveHour => to_twelve_hour(token),
        ClockFormat::TwentyFourHour => to_twenty_four_hour(token),
    }
}

/// Punch log table in insertion order, with resolved durations.
pub fn render_sessions(sessions: &[Session], summary: &DaySummary, clock: ClockFormat) -> String {
    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("Punch in", 8),
        Column::new("Punch out", 9),
        Column::new("Duration", 8),
    ]);

    for s in sessions {
        let resolved = summary.timeline.intervals.iter().find(|i| i.session_id == s.id);

        let out = match (&s.out_time, resolved) {
            (PunchOut::Fixed(t), _) => display_token(t, clock),
            (PunchOut::Open, Some(r)) => format!("{} (now)", format_token(r.out_minutes, clock)),
            (PunchOut::Open, None) => "now".to_string(),
        };
        let duration = resolved
            .map(|r| format_duration(r.duration_minutes()))
            .unwrap_or_default();

        table.add_row(vec![
            s.id.to_string(),
            display_token(&s.in_time, clock),
            out,
            duration,
        ]);
    }

    table.fit();
    table.render()
}

/// The four totals shown under the log.
pub fn render_totals(summary: &DaySummary) -> String {
    let remaining_value = format_remaining(summary.remaining);
    let remaining_value = if summary.is_overtime() {
        Colour::Red.bold().paint(remaining_value).to_string()
    } else {
        Colour::Green.paint(remaining_value).to_string()
    };

    let lines = [
        ("Worked time", format_duration(summary.worked())),
        ("Break time", format_duration(summary.break_minutes())),
        (summary.remaining_label(), remaining_value),
        ("Total span", format_duration(summary.total_span)),
    ];

    let mut out = String::new();
    for (label, value) in lines {
        out.push_str(&pad_right(&format!("{label}:"), LABEL_WIDTH));
        out.push_str(&value);
        out.push('\n');
    }
    out
}

pub fn render_day(
    sessions: &[Session],
    summary: &DaySummary,
    quota_hours: f64,
    clock: ClockFormat,
) -> String {
    let expected = bold(&format!(
        "Expected work: {} ({quota_hours}h)",
        format_duration(summary.expected)
    ));

    format!(
        "{}\n{}\n{}",
        render_sessions(sessions, summary, clock),
        expected,
        render_totals(summary)
    )
}

/// Preview of rows parsed from bulk text or a file.
pub fn render_rows(rows: &[ExtractedRow]) -> String {
    let mut table = Table::new(vec![
        Column::new("Row", 3),
        Column::new("Punch in", 8),
        Column::new("Punch out", 9),
    ]);
    for (i, r) in rows.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            r.in_time.clone(),
            r.out_time.clone(),
        ]);
    }
    table.fit();
    table.render()
}
