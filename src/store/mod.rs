//! Saved punch log: one JSON record per device.
//!
//! ```json
//! { "sessions": [{"id": 1, "inTime": "09:00 AM", "outTime": null}],
//!   "expectedWorkHours": 8, "savedAt": 1760000000000 }
//! ```
//!
//! Loading is best-effort: anything unreadable, malformed or older than the
//! configured maximum age is treated as "nothing saved".

use crate::errors::AppResult;
use crate::models::quota::{DEFAULT_QUOTA_HOURS, Quota};
use crate::models::session::Session;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// What gets written.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    pub sessions: Vec<Session>,
    pub expected_work_hours: f64,
    pub saved_at: i64,
}

/// What gets read: `expectedWorkHours` may hold anything, `savedAt` may be missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawState {
    sessions: Vec<Session>,
    #[serde(default)]
    expected_work_hours: Option<serde_json::Value>,
    #[serde(default)]
    saved_at: Option<f64>,
}

/// A record that survived validation and expiry.
#[derive(Debug, Clone)]
pub struct LoadedState {
    pub sessions: Vec<Session>,
    pub quota: Quota,
}

/// Validate a raw JSON record against the clock.
pub fn decode_state(raw: &str, now_ms: i64, max_age_ms: i64) -> Option<LoadedState> {
    let state: RawState = match serde_json::from_str(raw) {
        Ok(s) => s,
        Err(e) => {
            debug!(error = %e, "saved state is not a valid record");
            return None;
        }
    };

    let saved_at = state.saved_at.unwrap_or(0.0) as i64;
    if now_ms - saved_at > max_age_ms {
        debug!(saved_at, now_ms, "saved state expired");
        return None;
    }

    let quota = state
        .expected_work_hours
        .and_then(|v| v.as_f64())
        .map(Quota::new)
        .unwrap_or(Quota::new(DEFAULT_QUOTA_HOURS));

    Some(LoadedState {
        sessions: state.sessions,
        quota,
    })
}

/// Read the saved record at `path`, if there is a usable one.
pub fn load_state(path: &Path, now_ms: i64, max_age_ms: i64) -> Option<LoadedState> {
    match fs::read_to_string(path) {
        Ok(raw) => decode_state(&raw, now_ms, max_age_ms),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read saved punch log");
            None
        }
    }
}

/// Write the record atomically (temp file, then rename).
pub fn save_state(path: &Path, state: &SavedState) -> AppResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let json = serde_json::to_string(state)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Save, logging instead of failing.
pub fn persist(path: &Path, state: &SavedState) {
    if let Err(e) = save_state(path, state) {
        warn!(path = %path.display(), error = %e, "could not save punch log");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::PunchOut;

    const DAY_MS: i64 = 24 * 60 * 60 * 1000;

    #[test]
    fn decodes_a_fresh_record() {
        let raw = r#"{"sessions":[{"id":3,"inTime":"09:00 AM","outTime":null},
                     {"id":5,"inTime":"01:00 PM","outTime":"05:00 PM"}],
                     "expectedWorkHours":7.5,"savedAt":1000}"#;
        let loaded = decode_state(raw, 2000, DAY_MS).unwrap();

        assert_eq!(loaded.sessions.len(), 2);
        assert_eq!(loaded.sessions[0].out_time, PunchOut::Open);
        assert_eq!(loaded.sessions[1].out_time.token(), Some("05:00 PM"));
        assert_eq!(loaded.quota.hours(), 7.5);
    }

    #[test]
    fn expired_or_unstamped_records_are_absent() {
        let raw = r#"{"sessions":[],"expectedWorkHours":8,"savedAt":0}"#;
        assert!(decode_state(raw, DAY_MS + 1, DAY_MS).is_none());
        assert!(decode_state(raw, DAY_MS, DAY_MS).is_some());

        let unstamped = r#"{"sessions":[]}"#;
        assert!(decode_state(unstamped, DAY_MS + 1, DAY_MS).is_none());
    }

    #[test]
    fn quota_is_clamped_or_defaulted() {
        let big = r#"{"sessions":[],"expectedWorkHours":40,"savedAt":0}"#;
        assert_eq!(decode_state(big, 0, DAY_MS).unwrap().quota.hours(), 24.0);

        let neg = r#"{"sessions":[],"expectedWorkHours":-2,"savedAt":0}"#;
        assert_eq!(decode_state(neg, 0, DAY_MS).unwrap().quota.hours(), 0.0);

        let text = r#"{"sessions":[],"expectedWorkHours":"9","savedAt":0}"#;
        assert_eq!(decode_state(text, 0, DAY_MS).unwrap().quota.hours(), 8.0);
    }

    #[test]
    fn malformed_records_are_absent() {
        assert!(decode_state("not json", 0, DAY_MS).is_none());
        assert!(decode_state(r#"{"expectedWorkHours":8}"#, 0, DAY_MS).is_none());
        assert!(decode_state(r#"{"sessions":{}}"#, 0, DAY_MS).is_none());
    }

    #[test]
    fn save_then_load() {
        let mut path = std::env::temp_dir();
        path.push(format!("rpunchcalc_store_{}.json", std::process::id()));
        let _ = fs::remove_file(&path);

        let state = SavedState {
            sessions: vec![Session::new(1, "08:00 AM", PunchOut::Open)],
            expected_work_hours: 6.0,
            saved_at: 10,
        };
        save_state(&path, &state).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains(r#""outTime":null"#));
        assert!(raw.contains(r#""expectedWorkHours":6.0"#));

        let loaded = load_state(&path, 20, DAY_MS).unwrap();
        assert_eq!(loaded.sessions, state.sessions);
        assert_eq!(loaded.quota.hours(), 6.0);

        fs::remove_file(&path).unwrap();
        assert!(load_state(&path, 20, DAY_MS).is_none());
    }
}
