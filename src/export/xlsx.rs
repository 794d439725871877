// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{DATETIME_FORMAT, excel_serial};
use crate::export::model::{entry_to_row, get_headers};
use crate::export::AttendanceExport;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const FLAG_COLUMNS: [&str; 2] = ["late", "short_shift"];

/// One "Attendance" sheet with a frozen header row, banded rows and
/// auto-sized columns. Late arrivals and short shifts are highlighted in red.
pub(crate) fn export_xlsx(rows: &[AttendanceExport], path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Attendance").map_err(to_app_error)?;

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, item) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in entry_to_row(item).iter().enumerate() {
            let flagged = FLAG_COLUMNS.contains(&headers[col]) && value == "yes";
            write_cell(worksheet, row, col as u16, value, band, flagged)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    let target = path
        .to_str()
        .ok_or_else(|| AppError::Export("invalid path".to_string()))?;
    workbook.save(target).map_err(to_app_error)?;

    Ok(())
}

/// Timestamps become date cells and numbers numeric cells; the rest stays text.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
    flagged: bool,
) -> AppResult<()> {
    let mut fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if flagged {
        fmt = fmt.set_bold().set_font_color(Color::RGB(0xC00000));
    }

    if let Some(serial) = excel_serial(s) {
        worksheet
            .write_with_format(row, col, serial, &fmt.set_num_format(DATETIME_FORMAT))
            .map_err(to_app_error)?;
    } else if let Ok(num) = s.parse::<f64>() {
        worksheet
            .write_with_format(row, col, num, &fmt.set_align(FormatAlign::Right))
            .map_err(to_app_error)?;
    } else {
        worksheet
            .write_with_format(row, col, s, &fmt)
            .map_err(to_app_error)?;
    }

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
