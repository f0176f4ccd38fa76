use crate::cli::commands::{load_day, print_day, save_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut day = load_day(cfg);
        let was_last = day.sessions.len() == 1;

        day.sessions.remove(*id)?;
        save_day(cfg, &day);

        success(format!("Punch #{} has been removed.", id));
        if was_last {
            info("The log cannot be empty: a default punch was added.");
        }
        print_day(cfg, &day);
    }

    Ok(())
}
