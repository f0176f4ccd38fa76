use crate::cli::commands::{load_day, print_day, save_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::time_token::canonicalize;
use crate::errors::AppResult;
use crate::models::session::PunchOut;
use crate::ui::messages::success;

/// Add a punch pair; missing times come from the configured defaults.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { start, end, open } = cmd {
        let mut day = load_day(cfg);
        let defaults = cfg.session_defaults();

        //
        // 1. Punch in (typed tokens are committed in canonical form)
        //
        let in_time = match start {
            Some(t) => canonicalize(t, cfg.clock_format),
            None => defaults.in_time,
        };

        //
        // 2. Punch out
        //
        let out_time = if *open {
            PunchOut::Open
        } else {
            match end {
                Some(t) => PunchOut::Fixed(canonicalize(t, cfg.clock_format)),
                None => defaults.out_time,
            }
        };

        //
        // 3. Store and show
        //
        let id = day.sessions.add_with(in_time, out_time);
        save_day(cfg, &day);

        success(format!("Added punch #{}.", id));
        print_day(cfg, &day);
    }

    Ok(())
}
