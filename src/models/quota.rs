use serde::{Deserialize, Serialize};

pub const MAX_QUOTA_HOURS: f64 = 24.0;
pub const DEFAULT_QUOTA_HOURS: f64 = 8.0;

/// Expected work per day, in hours. Always within `[0, 24]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Quota(f64);

impl Quota {
    /// Clamp any input into the valid range; non-finite values become 0.
    pub fn new(hours: f64) -> Self {
        if !hours.is_finite() {
            return Quota(0.0);
        }
        Quota(hours.clamp(0.0, MAX_QUOTA_HOURS))
    }

    pub fn hours(&self) -> f64 {
        self.0
    }

    pub fn minutes(&self) -> i64 {
        (self.0 * 60.0).round() as i64
    }
}

impl Default for Quota {
    fn default() -> Self {
        Quota(DEFAULT_QUOTA_HOURS)
    }
}

impl From<f64> for Quota {
    fn from(v: f64) -> Self {
        Quota::new(v)
    }
}

impl From<Quota> for f64 {
    fn from(q: Quota) -> Self {
        q.0
    }
}
