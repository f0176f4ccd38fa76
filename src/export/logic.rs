// src/export/logic.rs

use crate::core::workday::Workday;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::build_day_export;
use crate::models::clock_format::ClockFormat;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the day's punch log.
    ///
    /// - `now`: minute used for open punch-outs
    /// - `clock`: display convention of the exported times
    pub fn export(
        day: &Workday,
        now: i64,
        format: ExportFormat,
        file: &str,
        clock: ClockFormat,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let summary = day.summary(now);
        let export = build_day_export(&summary, day.quota.hours(), clock);

        match format {
            ExportFormat::Csv => export_csv(&export.sessions, path)?,
            ExportFormat::Json => export_json(&export, path)?,
        }

        Ok(())
    }
}
