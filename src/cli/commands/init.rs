use crate::cli::commands::save_day;
use crate::config::Config;
use crate::core::workday::Workday;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (kept if already present)
///  - a fresh punch log with one default punch
pub fn handle(cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rPunchCalc…");

    let path = Config::config_file();
    if path.exists() {
        info(format!("Config file already present: {}", path.display()));
    } else {
        // command-line overrides are not written back
        let written = Config::default().save()?;
        success(format!("Config file: {}", written.display()));
    }

    let day = Workday::fresh(cfg);
    save_day(cfg, &day);
    success(format!("Punch log:   {}", cfg.state_path().display()));

    println!("🎉 rPunchCalc initialization completed!");
    Ok(())
}
