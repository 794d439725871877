// src/export/logic.rs

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::AttendanceExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// Entry point of the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the attendance log.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `range`: `None`, `"all"`, or a period filter on the check-in date
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows: Vec<AttendanceExport> = load_entries(pool, bounds)?
            .iter()
            .map(AttendanceExport::from)
            .collect();

        if rows.is_empty() {
            warning("No attendance rows found for selected range.");
            return Ok(());
        }

        ensure_writable(&path, force)?;

        format.write(&rows, &path)?;

        ttlog_quiet(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported {} row(s) to {}", rows.len(), path.display()),
        );

        Ok(())
    }
}
