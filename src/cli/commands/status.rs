use crate::cli::commands::{load_day, print_status, save_day};
use crate::config::Config;
use crate::errors::AppResult;

/// Show the log and totals. Saving refreshes the expiry stamp, the way
/// reopening the calculator keeps today's log alive.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let day = load_day(cfg);
    save_day(cfg, &day);

    print_status(cfg, &day);
    Ok(())
}
