use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Display convention for time tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum ClockFormat {
    /// `HH:MM AM|PM`, hour 01..12
    #[default]
    #[serde(rename = "12h")]
    #[value(name = "12h")]
    TwelveHour,
    /// `HH:MM`, hour 00..23
    #[serde(rename = "24h")]
    #[value(name = "24h")]
    TwentyFourHour,
}
