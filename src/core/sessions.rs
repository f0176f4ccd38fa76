//! The day's punch log: an ordered, never-empty list of sessions.

use crate::core::extract::ExtractedRow;
use crate::errors::{AppError, AppResult};
use crate::models::session::{PunchOut, Session};
use tracing::{debug, warn};

/// Template for sessions created by `add` or by the never-empty rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    pub in_time: String,
    pub out_time: PunchOut,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            in_time: "09:00 AM".to_string(),
            out_time: PunchOut::Fixed("06:00 PM".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionList {
    sessions: Vec<Session>,
    next_id: u64,
    defaults: SessionDefaults,
}

impl SessionList {
    /// A list holding one default session.
    pub fn new(defaults: SessionDefaults) -> Self {
        let mut list = Self {
            sessions: Vec::new(),
            next_id: 1,
            defaults,
        };
        list.push_default();
        list
    }

    /// Rebuild from saved sessions; ids continue after the highest stored one.
    pub fn restore(sessions: Vec<Session>, defaults: SessionDefaults) -> Self {
        if sessions.is_empty() {
            return Self::new(defaults);
        }

        let max_id = sessions.iter().map(|s| s.id).max().unwrap_or(0);
        match max_id.checked_add(1) {
            Some(next_id) => Self {
                sessions,
                next_id,
                defaults,
            },
            None => {
                // sequence exhausted: renumber from 1, keeping the order
                warn!(max_id, "punch ids exhausted, renumbering");
                let mut list = Self {
                    sessions: Vec::with_capacity(sessions.len()),
                    next_id: 1,
                    defaults,
                };
                for s in sessions {
                    list.add_with(s.in_time, s.out_time);
                }
                list
            }
        }
    }

    fn issue_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn push_default(&mut self) -> u64 {
        let id = self.issue_id();
        let s = Session::new(id, self.defaults.in_time.clone(), self.defaults.out_time.clone());
        self.sessions.push(s);
        id
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: u64) -> AppResult<&mut Session> {
        self.sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(AppError::SessionNotFound(id))
    }

    /// Append a default session and return its id.
    pub fn add(&mut self) -> u64 {
        self.push_default()
    }

    /// Append a session with explicit times.
    pub fn add_with(&mut self, in_time: impl Into<String>, out_time: PunchOut) -> u64 {
        let id = self.issue_id();
        self.sessions.push(Session::new(id, in_time, out_time));
        id
    }

    /// Remove a session. Removing the last one leaves a fresh default behind.
    pub fn remove(&mut self, id: u64) -> AppResult<()> {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != id);
        if self.sessions.len() == before {
            return Err(AppError::SessionNotFound(id));
        }

        if self.sessions.is_empty() {
            let fresh = self.push_default();
            debug!(removed = id, fresh, "last punch removed, default inserted");
        }
        Ok(())
    }

    pub fn set_in(&mut self, id: u64, in_time: impl Into<String>) -> AppResult<()> {
        self.get_mut(id)?.in_time = in_time.into();
        Ok(())
    }

    pub fn set_out(&mut self, id: u64, out_time: PunchOut) -> AppResult<()> {
        self.get_mut(id)?.out_time = out_time;
        Ok(())
    }

    /// Import: replace the whole list with `rows`, fresh ids for each.
    ///
    /// An empty row set is refused so the list never ends up empty.
    pub fn replace_all(&mut self, rows: &[ExtractedRow]) -> AppResult<()> {
        if rows.is_empty() {
            return Err(AppError::NoValidRows("No rows to import.".to_string()));
        }

        let replaced = self.sessions.len();
        self.sessions.clear();
        for row in rows {
            self.add_with(row.in_time.clone(), PunchOut::Fixed(row.out_time.clone()));
        }
        debug!(replaced, imported = rows.len(), "punch log replaced");
        Ok(())
    }

    /// Drop everything and start over from one default session.
    pub fn reset(&mut self) {
        self.sessions.clear();
        self.push_default();
    }
}
