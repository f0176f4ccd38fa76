use crate::core::calculator::{expected, gaps, remaining, span, timeline};
use crate::models::{day_summary::DaySummary, quota::Quota, session::Session};

pub struct Core;

impl Core {
    /// Full recomputation against one sampled instant.
    ///
    /// Pure: the sessions are never touched, and an open punch-out only
    /// exists as `now` inside the returned summary.
    pub fn build_daily_summary(sessions: &[Session], quota: &Quota, now: i64) -> DaySummary {
        let timeline = timeline::build_timeline(sessions, now);
        let gaps = gaps::analyze_gaps(&timeline);
        let expected = expected::calculate_expected(quota);
        let remaining = remaining::calculate_remaining(&timeline, expected);
        let total_span = span::calculate_span(&timeline);

        DaySummary {
            timeline,
            gaps,
            expected,
            remaining,
            total_span,
        }
    }
}
