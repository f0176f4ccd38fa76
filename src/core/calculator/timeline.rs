use crate::core::time_token::parse_to_minutes;
use crate::models::session::{PunchOut, Session};
use serde::Serialize;

/// A session resolved to concrete minutes since midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedInterval {
    pub session_id: u64,
    pub in_minutes: i64,
    pub out_minutes: i64,
    /// The punch-out was open and resolved to the sampled instant.
    pub open: bool,
}

impl ResolvedInterval {
    /// Never negative; no wrap past midnight.
    pub fn duration_minutes(&self) -> i64 {
        (self.out_minutes - self.in_minutes).max(0)
    }
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct Timeline {
    /// Sorted by `in_minutes`, ties in insertion order.
    pub intervals: Vec<ResolvedInterval>,
    pub total_worked_minutes: i64,
}

impl Timeline {
    pub fn first_in(&self) -> Option<i64> {
        self.intervals.first().map(|i| i.in_minutes)
    }

    pub fn last_out(&self) -> Option<i64> {
        self.intervals.last().map(|i| i.out_minutes)
    }
}

/// Resolve one session. `now` stands in for an open punch-out.
pub fn resolve(session: &Session, now: i64) -> ResolvedInterval {
    let out_minutes = match &session.out_time {
        PunchOut::Open => now,
        PunchOut::Fixed(token) => parse_to_minutes(token),
    };

    ResolvedInterval {
        session_id: session.id,
        in_minutes: parse_to_minutes(&session.in_time),
        out_minutes,
        open: session.out_time.is_open(),
    }
}

/// Resolve every session against the same instant and sort by start.
///
/// Overlapping intervals are kept as they are; each one counts on its own.
pub fn build_timeline(sessions: &[Session], now: i64) -> Timeline {
    if sessions.is_empty() {
        return Timeline::default();
    }

    let mut intervals: Vec<ResolvedInterval> =
        sessions.iter().map(|s| resolve(s, now)).collect();

    // stable: equal starts keep insertion order
    intervals.sort_by_key(|i| i.in_minutes);

    let total = intervals.iter().map(ResolvedInterval::duration_minutes).sum();

    Timeline {
        intervals,
        total_worked_minutes: total,
    }
}
