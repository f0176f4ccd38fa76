use crate::core::calculator::gaps::GapInfo;
use crate::core::calculator::timeline::Timeline;
use serde::Serialize;

#[derive(Debug, Default, Clone, Serialize)]
pub struct DaySummary {
    pub timeline: Timeline,
    pub gaps: GapInfo,
    pub expected: i64,
    /// Signed: negative means overtime.
    pub remaining: i64,
    pub total_span: i64,
}

impl DaySummary {
    pub fn worked(&self) -> i64 {
        self.timeline.total_worked_minutes
    }

    pub fn break_minutes(&self) -> i64 {
        self.gaps.total_gap_minutes
    }

    pub fn is_overtime(&self) -> bool {
        self.remaining < 0
    }

    /// "Remaining to work" or "Overtime", depending on the sign of `remaining`.
    pub fn remaining_label(&self) -> &'static str {
        if self.is_overtime() {
            "Overtime"
        } else {
            "Remaining to work"
        }
    }
}
