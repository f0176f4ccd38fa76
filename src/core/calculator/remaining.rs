use crate::core::calculator::timeline::Timeline;

/// Signed: `>= 0` is still owed, `< 0` is overtime.
pub fn calculate_remaining(timeline: &Timeline, expected: i64) -> i64 {
    expected - timeline.total_worked_minutes
}
