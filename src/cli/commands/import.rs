use crate::cli::commands::commit_rows;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::extract::{RowSource, require_rows};
use crate::errors::{AppError, AppResult};
use std::fs;
use std::io::ErrorKind;

/// Replace the punch log with the rows of an uploaded CSV / text file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, dry_run } = cmd {
        let text = fs::read_to_string(file).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => AppError::Other("Could not read file as text.".to_string()),
            _ => AppError::from(e),
        })?;

        let rows = require_rows(&text, RowSource::Upload)?;
        commit_rows(cfg, &rows, *dry_run)?;
    }

    Ok(())
}
