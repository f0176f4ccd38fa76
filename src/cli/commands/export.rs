use crate::cli::commands::load_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::time::{now_minutes, today};
use tracing::debug;

/// Handle the `export` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let file = file
            .clone()
            .unwrap_or_else(|| format.default_file_name(today()));
        debug!(format = format.extension(), file = %file, "exporting punch log");

        let day = load_day(cfg);
        ExportLogic::export(&day, now_minutes(), *format, &file, cfg.clock_format, *force)?;
    }

    Ok(())
}
