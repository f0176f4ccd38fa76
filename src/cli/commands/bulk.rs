use crate::cli::commands::commit_rows;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::extract::{RowSource, require_rows};
use crate::errors::AppResult;
use std::io::{self, Read};

/// Replace the punch log with pairs given inline or on stdin.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bulk { text, dry_run } = cmd {
        let input = match text {
            Some(t) => t.clone(),
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let rows = require_rows(&input, RowSource::Bulk)?;
        commit_rows(cfg, &rows, *dry_run)?;
    }

    Ok(())
}
