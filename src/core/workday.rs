use crate::config::Config;
use crate::core::logic::Core;
use crate::core::sessions::SessionList;
use crate::models::day_summary::DaySummary;
use crate::models::quota::Quota;
use crate::store::{LoadedState, SavedState};

/// Everything the calculator keeps for one day: the punch log and the quota.
#[derive(Debug, Clone)]
pub struct Workday {
    pub sessions: SessionList,
    pub quota: Quota,
}

impl Workday {
    pub fn fresh(cfg: &Config) -> Self {
        Self {
            sessions: SessionList::new(cfg.session_defaults()),
            quota: Quota::new(cfg.default_expected_hours),
        }
    }

    /// Start from a saved record when there is a non-empty one.
    pub fn restore(loaded: Option<LoadedState>, cfg: &Config) -> Self {
        match loaded {
            Some(state) if !state.sessions.is_empty() => Self {
                sessions: SessionList::restore(state.sessions, cfg.session_defaults()),
                quota: state.quota,
            },
            _ => Self::fresh(cfg),
        }
    }

    /// Clamped to `[0, 24]`.
    pub fn set_quota(&mut self, hours: f64) {
        self.quota = Quota::new(hours);
    }

    pub fn summary(&self, now: i64) -> DaySummary {
        Core::build_daily_summary(self.sessions.sessions(), &self.quota, now)
    }

    /// The record to persist. Open punch-outs stay open.
    pub fn to_saved(&self, now_ms: i64) -> SavedState {
        SavedState {
            sessions: self.sessions.sessions().to_vec(),
            expected_work_hours: self.quota.hours(),
            saved_at: now_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::{PunchOut, Session};

    #[test]
    fn empty_saved_log_starts_fresh() {
        let cfg = Config::default();
        let loaded = LoadedState {
            sessions: vec![],
            quota: Quota::new(5.0),
        };
        let day = Workday::restore(Some(loaded), &cfg);
        assert_eq!(day.sessions.len(), 1);
        assert_eq!(day.quota.hours(), 8.0);
    }

    #[test]
    fn open_punch_out_is_not_baked_into_saved_state() {
        let cfg = Config::default();
        let loaded = LoadedState {
            sessions: vec![Session::new(2, "09:00 AM", PunchOut::Open)],
            quota: Quota::new(8.0),
        };
        let day = Workday::restore(Some(loaded), &cfg);

        assert_eq!(day.summary(10 * 60).worked(), 60);
        assert_eq!(day.summary(12 * 60).worked(), 180);

        let saved = day.to_saved(123);
        assert_eq!(saved.sessions[0].out_time, PunchOut::Open);
        assert_eq!(saved.saved_at, 123);
    }

    #[test]
    fn quota_input_is_clamped() {
        let mut day = Workday::fresh(&Config::default());
        day.set_quota(30.0);
        assert_eq!(day.quota.hours(), 24.0);
        day.set_quota(-1.0);
        assert_eq!(day.quota.hours(), 0.0);
        day.set_quota(f64::NAN);
        assert_eq!(day.quota.hours(), 0.0);
    }
}
