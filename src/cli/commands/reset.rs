use crate::cli::commands::{load_day, print_day, save_day};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Back to a single default punch; the expected hours are kept.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut day = load_day(cfg);
    day.sessions.reset();
    save_day(cfg, &day);

    success("Punch log cleared.");
    print_day(cfg, &day);
    Ok(())
}
