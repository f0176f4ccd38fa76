#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary under test with HOME / APPDATA pointing at `home`, so the user's
/// real configuration is never read.
pub fn rpc(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rpunchcalc");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("RUST_LOG");
    cmd
}

/// Create an empty, test-specific home directory inside the system temp dir
pub fn setup_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rpunchcalc_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// Path of the saved punch log inside a test home
pub fn state_file(home: &Path) -> String {
    home.join("punches.json").to_string_lossy().to_string()
}

/// Write a raw state record
pub fn write_state(path: &str, json: &str) {
    fs::write(path, json).expect("write state file");
}

/// Parsed saved punch log
pub fn read_state(path: &str) -> serde_json::Value {
    let raw = fs::read_to_string(path).expect("read state file");
    serde_json::from_str(&raw).expect("state file is JSON")
}

/// Epoch milliseconds, for writing non-expired records
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
