// src/export/model.rs

use crate::core::calculator::timeline::ResolvedInterval;
use crate::core::time_token::format_token;
use crate::models::clock_format::ClockFormat;
use crate::models::day_summary::DaySummary;
use crate::utils::formatting::{format_duration, format_remaining};
use serde::Serialize;

/// Flat row for CSV / JSON. The first two columns are the punch times so a
/// CSV export can be fed straight back to `import`.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub punch_in: String,
    pub punch_out: String,
    pub duration: String,
    pub open: bool,
    pub id: u64,
}

#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    pub expected_work_hours: f64,
    pub worked_minutes: i64,
    pub break_minutes: i64,
    pub remaining_minutes: i64,
    pub total_span_minutes: i64,
    pub worked: String,
    pub break_time: String,
    pub remaining_label: String,
    pub remaining: String,
    pub total_span: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub generated_at: String,
    pub sessions: Vec<SessionExport>,
    pub summary: SummaryExport,
}

pub(crate) fn interval_to_export(i: &ResolvedInterval, clock: ClockFormat) -> SessionExport {
    SessionExport {
        punch_in: format_token(i.in_minutes, clock),
        punch_out: format_token(i.out_minutes, clock),
        duration: format_duration(i.duration_minutes()),
        open: i.open,
        id: i.session_id,
    }
}

pub(crate) fn build_day_export(
    summary: &DaySummary,
    quota_hours: f64,
    clock: ClockFormat,
) -> DayExport {
    let sessions = summary
        .timeline
        .intervals
        .iter()
        .map(|i| interval_to_export(i, clock))
        .collect();

    DayExport {
        generated_at: chrono::Local::now().to_rfc3339(),
        sessions,
        summary: SummaryExport {
            expected_work_hours: quota_hours,
            worked_minutes: summary.worked(),
            break_minutes: summary.break_minutes(),
            remaining_minutes: summary.remaining,
            total_span_minutes: summary.total_span,
            worked: format_duration(summary.worked()),
            break_time: format_duration(summary.break_minutes()),
            remaining_label: summary.remaining_label().to_string(),
            remaining: format_remaining(summary.remaining),
            total_span: format_duration(summary.total_span),
        },
    }
}
