// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::AttendanceExport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Pretty-printed JSON array, one object per attendance row.
pub(crate) fn export_json(rows: &[AttendanceExport], path: &Path) -> AppResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, rows)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// CSV with a header row taken from the serde field names.
pub(crate) fn export_csv(rows: &[AttendanceExport], path: &Path) -> AppResult<()> {
    let csv_err = |e: csv::Error| AppError::Export(format!("CSV error: {e}"));

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(csv_err)?;

    for row in rows {
        wtr.serialize(row).map_err(csv_err)?;
    }

    wtr.flush()?;
    Ok(())
}
