//! Payroll export of the attendance log (CSV, JSON, XLSX).

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod range;
mod xlsx;

pub use logic::ExportLogic;
pub use model::AttendanceExport;
pub use range::parse_range;

use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Xlsx => "XLSX",
        }
    }

    /// Write `rows` to `path` in this format.
    pub(crate) fn write(&self, rows: &[AttendanceExport], path: &Path) -> AppResult<()> {
        info(format!(
            "Exporting {} row(s) to {}: {}",
            rows.len(),
            self.label(),
            path.display()
        ));

        match self {
            ExportFormat::Csv => json_csv::export_csv(rows, path)?,
            ExportFormat::Json => json_csv::export_json(rows, path)?,
            ExportFormat::Xlsx => xlsx::export_xlsx(rows, path)?,
        }

        success(format!("{} export completed: {}", self.label(), path.display()));
        Ok(())
    }
}
