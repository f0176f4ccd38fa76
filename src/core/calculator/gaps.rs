//! Break time: idle gaps between consecutive sorted intervals.

use crate::core::calculator::timeline::Timeline;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gap {
    pub start: i64,
    pub end: i64,
    pub duration_minutes: i64,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct GapInfo {
    pub gaps: Vec<Gap>,
    pub total_gap_minutes: i64,
}

/// An interval starting before the previous one ends contributes no break.
pub fn analyze_gaps(timeline: &Timeline) -> GapInfo {
    let mut info = GapInfo::default();

    for w in timeline.intervals.windows(2) {
        let start = w[0].out_minutes;
        let end = w[1].in_minutes;

        if end > start {
            let duration = end - start;
            info.total_gap_minutes += duration;
            info.gaps.push(Gap {
                start,
                end,
                duration_minutes: duration,
            });
        }
    }

    info
}
