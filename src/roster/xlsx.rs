// src/roster/xlsx.rs

use super::csv_io::{CHECK_IN_TITLE, CHECKED_TITLE, format_check_in};
use super::{Roster, RosterAccess};
use crate::core::highlight::HighlightSet;
use crate::errors::{AppError, AppResult};
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Write the roster as a workbook, painting the active highlights.
///
/// Roster cells keep their 1-based coordinates: roster (row, col) lands on
/// worksheet (row - 1, col - 1). The check state goes into two extra
/// columns after the roster's own.
pub fn export_roster_xlsx(roster: &Roster, highlights: &HighlightSet, path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let columns = roster.column_count();
    let mut col_widths = vec![0usize; columns + 2];

    // ---------------------------
    // Header row
    // ---------------------------
    let mut header: Vec<&str> = roster.header().iter().map(String::as_str).collect();
    header.push(CHECKED_TITLE);
    header.push(CHECK_IN_TITLE);

    for (c, title) in header.iter().enumerate() {
        worksheet.write_with_format(0, c as u16, *title, &header_format)?;
        col_widths[c] = UnicodeWidthStr::width(*title);
    }
    worksheet.set_freeze_panes(1, 0)?;

    // ---------------------------
    // Data rows
    // ---------------------------
    for (row, data) in roster.data_rows() {
        let xl_row = (row - 1) as u32;

        for col in 1..=columns {
            let value = data.cells[col - 1].as_str();
            write_cell(worksheet, xl_row, (col - 1) as u16, value, highlights, row, col)?;
            col_widths[col - 1] = col_widths[col - 1].max(UnicodeWidthStr::width(value));
        }

        let checked = if data.checked { "yes" } else { "no" };
        let check_in = format_check_in(data.check_in);
        write_cell(worksheet, xl_row, columns as u16, checked, highlights, row, columns + 1)?;
        write_cell(worksheet, xl_row, (columns + 1) as u16, &check_in, highlights, row, columns + 2)?;
        col_widths[columns + 1] = col_widths[columns + 1].max(check_in.len());
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    workbook.save(path_str(path)?)?;

    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    xl_row: u32,
    xl_col: u16,
    value: &str,
    highlights: &HighlightSet,
    row: usize,
    col: usize,
) -> AppResult<()> {
    let mut fmt = Format::new().set_border(FormatBorder::Thin);
    if let Some(color) = highlights.color_at(row, col) {
        fmt = fmt
            .set_background_color(Color::RGB(color.over_white()))
            .set_pattern(FormatPattern::Solid);
    }

    // Codes like "0012345678" must stay text.
    worksheet.write_string_with_format(xl_row, xl_col, value, &fmt)?;
    Ok(())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export(format!("invalid path: {}", path.display())))
}
