//! Day export: the resolved punch log plus its totals, as CSV or JSON.

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;

pub use logic::ExportLogic;
pub use model::{DayExport, SessionExport, SummaryExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Used when no `--file` is given: `punches-YYYY-MM-DD.<ext>`.
    pub fn default_file_name(&self, date: chrono::NaiveDate) -> String {
        format!("punches-{}.{}", date.format("%Y-%m-%d"), self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_carries_date_and_extension() {
        let d = chrono::NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(ExportFormat::Json.default_file_name(d), "punches-2026-03-09.json");
        assert_eq!(ExportFormat::Csv.default_file_name(d), "punches-2026-03-09.csv");
    }
}
