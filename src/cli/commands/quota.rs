use crate::cli::commands::{load_day, print_day, save_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Quota { hours } = cmd {
        if hours.is_nan() {
            return Err(AppError::InvalidQuota(hours.to_string()));
        }

        let mut day = load_day(cfg);
        day.set_quota(*hours);

        if day.quota.hours() != *hours {
            warning(format!(
                "Expected work hours must be between 0 and 24: using {}.",
                day.quota.hours()
            ));
        }

        save_day(cfg, &day);
        success(format!("Expected work set to {}h.", day.quota.hours()));
        print_day(cfg, &day);
    }

    Ok(())
}
