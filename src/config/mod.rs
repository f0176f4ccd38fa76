use crate::core::sessions::SessionDefaults;
use crate::errors::{AppError, AppResult};
use crate::models::clock_format::ClockFormat;
use crate::models::quota::DEFAULT_QUOTA_HOURS;
use crate::models::session::PunchOut;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_state_file")]
    pub state_file: String,
    #[serde(default = "default_expected_hours")]
    pub default_expected_hours: f64,
    #[serde(default)]
    pub clock_format: ClockFormat,
    #[serde(default = "default_punch_in")]
    pub default_punch_in: String,
    #[serde(default = "default_punch_out")]
    pub default_punch_out: String,
    #[serde(default)]
    pub open_punch_out_by_default: bool,
    #[serde(default = "default_state_max_age_hours")]
    pub state_max_age_hours: u64,
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: u64,
}

fn default_state_file() -> String {
    Config::state_path_default().to_string_lossy().to_string()
}
fn default_expected_hours() -> f64 {
    DEFAULT_QUOTA_HOURS
}
fn default_punch_in() -> String {
    "09:00 AM".to_string()
}
fn default_punch_out() -> String {
    "06:00 PM".to_string()
}
fn default_state_max_age_hours() -> u64 {
    24
}
fn default_tick_seconds() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            default_expected_hours: default_expected_hours(),
            clock_format: ClockFormat::default(),
            default_punch_in: default_punch_in(),
            default_punch_out: default_punch_out(),
            open_punch_out_by_default: false,
            state_max_age_hours: default_state_max_age_hours(),
            tick_seconds: default_tick_seconds(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rpunchcalc")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rpunchcalc")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpunchcalc.conf")
    }

    /// Return the default path of the saved punch log
    pub fn state_path_default() -> PathBuf {
        Self::config_dir().join("rpunchcalc.json")
    }

    /// Resolved state file path (`~/` expanded).
    pub fn state_path(&self) -> PathBuf {
        expand_tilde(&self.state_file)
    }

    /// Load configuration from file, or return defaults if not found.
    /// A broken file is reported and ignored.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Config::default();
        }

        let parsed = fs::read_to_string(&path)
            .map_err(AppError::from)
            .and_then(|content| serde_yaml::from_str::<Config>(&content).map_err(AppError::from));

        match parsed {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable configuration, using defaults");
                Config::default()
            }
        }
    }

    /// Write the configuration file, creating the directory if needed.
    pub fn save(&self) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = serde_yaml::to_string(self)?;
        let path = Self::config_file();
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(path)
    }

    /// Template for new sessions.
    pub fn session_defaults(&self) -> SessionDefaults {
        let out_time = if self.open_punch_out_by_default {
            PunchOut::Open
        } else {
            PunchOut::Fixed(self.default_punch_out.clone())
        };

        SessionDefaults {
            in_time: self.default_punch_in.clone(),
            out_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: Config = serde_yaml::from_str("clock_format: 24h\ntick_seconds: 5\n").unwrap();
        assert_eq!(cfg.clock_format, ClockFormat::TwentyFourHour);
        assert_eq!(cfg.tick_seconds, 5);
        assert_eq!(cfg.default_expected_hours, 8.0);
        assert_eq!(cfg.state_max_age_hours, 24);
        assert_eq!(cfg.default_punch_in, "09:00 AM");
    }

    #[test]
    fn open_default_punch_out() {
        let cfg = Config {
            open_punch_out_by_default: true,
            ..Config::default()
        };
        assert_eq!(cfg.session_defaults().out_time, PunchOut::Open);
        assert_eq!(
            Config::default().session_defaults().out_time,
            PunchOut::Fixed("06:00 PM".into())
        );
    }
}
