use crate::cli::commands::{load_day, print_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Periodic recomputation for open punch-outs.
///
/// Every tick re-reads the saved log and recomputes against a freshly
/// sampled minute. Nothing is written back: the resolved "now" only lives
/// in what gets printed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { interval, ticks } = cmd {
        let every = Duration::from_secs(interval.unwrap_or(cfg.tick_seconds));
        let mut done: u64 = 0;

        loop {
            let day = load_day(cfg);
            print_status(cfg, &day);

            done += 1;
            debug!(tick = done, "recomputed");
            if *ticks != 0 && done >= *ticks {
                break;
            }

            thread::sleep(every);
        }
    }

    Ok(())
}
