use serde::{Deserialize, Serialize};

/// End of a punch session.
///
/// `Open` is the "use current time" punch-out: it is resolved against the
/// sampled instant on every recomputation and never stored as a concrete
/// time. In the persisted record it is written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum PunchOut {
    Fixed(String),
    Open,
}

impl PunchOut {
    pub fn is_open(&self) -> bool {
        matches!(self, PunchOut::Open)
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            PunchOut::Fixed(t) => Some(t.as_str()),
            PunchOut::Open => None,
        }
    }
}

impl From<Option<String>> for PunchOut {
    fn from(v: Option<String>) -> Self {
        match v {
            Some(t) => PunchOut::Fixed(t),
            None => PunchOut::Open,
        }
    }
}

impl From<PunchOut> for Option<String> {
    fn from(p: PunchOut) -> Self {
        match p {
            PunchOut::Fixed(t) => Some(t),
            PunchOut::Open => None,
        }
    }
}

/// One punch in / punch out pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: u64,        // ⇔ sessions[].id
    pub in_time: String, // ⇔ sessions[].inTime  ("09:00 AM")
    #[serde(default = "open_punch_out")]
    pub out_time: PunchOut, // ⇔ sessions[].outTime ("06:00 PM" | null)
}

fn open_punch_out() -> PunchOut {
    PunchOut::Open
}

impl Session {
    pub fn new(id: u64, in_time: impl Into<String>, out_time: PunchOut) -> Self {
        Self {
            id,
            in_time: in_time.into(),
            out_time,
        }
    }
}
