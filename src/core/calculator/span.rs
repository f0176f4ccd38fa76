use crate::core::calculator::timeline::Timeline;

/// First punch-in to last punch-out of the sorted timeline; 0 when empty.
///
/// `last_out` is the end of the interval with the latest *start*, not the
/// latest end, so a long early interval can make this shorter than expected.
pub fn calculate_span(timeline: &Timeline) -> i64 {
    match (timeline.first_in(), timeline.last_out()) {
        (Some(first), Some(last)) => (last - first).max(0),
        _ => 0,
    }
}
