use crate::cli::commands::{load_day, print_day, save_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::time_token::canonicalize;
use crate::errors::{AppError, AppResult};
use crate::models::session::PunchOut;
use crate::ui::messages::success;

/// Change punch in / punch out of an existing punch.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        start,
        end,
        now,
    } = cmd
    {
        if start.is_none() && end.is_none() && !*now {
            return Err(AppError::Usage(
                "Nothing to change: use --in, --out or --now.".to_string(),
            ));
        }

        let mut day = load_day(cfg);

        if let Some(t) = start {
            day.sessions.set_in(*id, canonicalize(t, cfg.clock_format))?;
        }

        if *now {
            day.sessions.set_out(*id, PunchOut::Open)?;
        } else if let Some(t) = end {
            day.sessions
                .set_out(*id, PunchOut::Fixed(canonicalize(t, cfg.clock_format)))?;
        }

        save_day(cfg, &day);

        success(format!("Punch #{} updated.", id));
        print_day(cfg, &day);
    }

    Ok(())
}
