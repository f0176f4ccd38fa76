//! Subcommand handlers plus the load → change → save plumbing they share.

pub mod add;
pub mod bulk;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod quota;
pub mod reset;
pub mod status;
pub mod watch;

use crate::config::Config;
use crate::core::extract::ExtractedRow;
use crate::core::workday::Workday;
use crate::errors::AppResult;
use crate::store;
use crate::core::time_token::format_token;
use crate::ui::messages::{header, info, success};
use crate::ui::summary::{render_day, render_rows};
use crate::utils::time::{hours_to_millis, now_millis, now_minutes};

/// The saved day, or a fresh one when nothing usable is stored.
pub(crate) fn load_day(cfg: &Config) -> Workday {
    let loaded = store::load_state(
        &cfg.state_path(),
        now_millis(),
        hours_to_millis(cfg.state_max_age_hours),
    );
    Workday::restore(loaded, cfg)
}

/// Best-effort save; failures are logged, never returned.
pub(crate) fn save_day(cfg: &Config, day: &Workday) {
    store::persist(&cfg.state_path(), &day.to_saved(now_millis()));
}

/// Recompute against the current minute and print log + totals.
pub(crate) fn print_day(cfg: &Config, day: &Workday) {
    println!("{}", day_view(cfg, day, now_minutes()));
}

fn day_view(cfg: &Config, day: &Workday, now: i64) -> String {
    render_day(
        day.sessions.sessions(),
        &day.summary(now),
        day.quota.hours(),
        cfg.clock_format,
    )
}

/// Header line and day view, both against the same sampled minute.
fn status_view(cfg: &Config, day: &Workday, now: i64) -> (String, String) {
    let title = format!("Punch log (now {})", format_token(now, cfg.clock_format));
    (title, day_view(cfg, day, now))
}

/// `status` / `watch` output: one clock sample for the header and the totals.
pub(crate) fn print_status(cfg: &Config, day: &Workday) {
    let (title, body) = status_view(cfg, day, now_minutes());
    header(title);
    println!("{}", body);
}

/// Shared tail of `import` and `bulk`: preview, then replace the log.
pub(crate) fn commit_rows(cfg: &Config, rows: &[ExtractedRow], dry_run: bool) -> AppResult<()> {
    println!("{}", render_rows(rows));
    info(format!("Parsed {} row(s).", rows.len()));

    if dry_run {
        info("Dry run: punch log left unchanged.");
        return Ok(());
    }

    let mut day = load_day(cfg);
    day.sessions.replace_all(rows)?;
    save_day(cfg, &day);

    success(format!("Punch log replaced with {} punch(es).", rows.len()));
    print_day(cfg, &day);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::PunchOut;

    #[test]
    fn status_header_and_open_punch_share_one_minute() {
        let cfg = Config::default();
        let mut day = Workday::fresh(&cfg);
        day.sessions.add_with("08:00 AM", PunchOut::Open);

        let (title, body) = status_view(&cfg, &day, 10 * 60 + 59);
        assert_eq!(title, "Punch log (now 10:59 AM)");
        assert!(body.contains("10:59 AM (now)"));
        assert!(body.contains("2h 59m"));
    }
}
