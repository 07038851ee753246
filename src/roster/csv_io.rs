// src/roster/csv_io.rs

use super::{Roster, RosterRow};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use std::io::{Read, Write};
use std::path::Path;

pub const CHECKED_TITLE: &str = "checked";
pub const CHECK_IN_TITLE: &str = "check_in";
pub const CHECK_IN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Load a roster from a CSV file. The first record is the header row.
pub fn load_roster(path: &Path) -> AppResult<Roster> {
    let file = std::fs::File::open(path)
        .map_err(|e| AppError::Roster(format!("cannot open {}: {}", path.display(), e)))?;
    read_roster(file)
}

/// Parse a roster. Trailing `checked` / `check_in` columns, when present,
/// are lifted out of the cells into the per-row check state.
pub fn read_roster<R: Read>(reader: R) -> AppResult<Roster> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = rdr.records();

    let header: Vec<String> = match records.next() {
        Some(rec) => rec?.iter().map(|s| s.trim().to_string()).collect(),
        None => return Err(AppError::Roster("roster file is empty".into())),
    };

    let has_state = header.len() >= 2
        && header[header.len() - 2].eq_ignore_ascii_case(CHECKED_TITLE)
        && header[header.len() - 1].eq_ignore_ascii_case(CHECK_IN_TITLE);
    let columns = if has_state {
        header.len() - 2
    } else {
        header.len()
    };

    let mut data = Vec::new();
    for (i, rec) in records.enumerate() {
        let rec = rec?;
        let mut cells: Vec<String> = rec.iter().map(|s| s.trim().to_string()).collect();
        // +2: one for the header, one for 1-based rows
        if cells.iter().skip(header.len()).any(|c| !c.is_empty()) {
            return Err(AppError::Roster(format!(
                "row {}: {} cells but the header has {} columns",
                i + 2,
                cells.len(),
                header.len()
            )));
        }
        cells.resize(header.len(), String::new());

        let mut row = RosterRow::new(cells[..columns].to_vec());
        if has_state {
            let flag = &cells[columns];
            let time = &cells[columns + 1];
            row.checked = parse_flag(flag);
            row.check_in = parse_check_in(time).map_err(|_| {
                AppError::Roster(format!("row {}: invalid check-in time '{}'", i + 2, time))
            })?;
            if row.check_in.is_none() {
                row.checked = false;
            }
        }
        data.push(row);
    }

    Ok(Roster::new(header[..columns].to_vec(), data))
}

/// Save the roster to a CSV file, check state appended as two columns.
pub fn save_roster(roster: &Roster, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    write_roster(roster, file)
}

pub fn write_roster<W: Write>(roster: &Roster, writer: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = roster.header().iter().map(String::as_str).collect();
    header.push(CHECKED_TITLE);
    header.push(CHECK_IN_TITLE);
    wtr.write_record(&header)?;

    for (_, row) in roster.data_rows() {
        let mut record: Vec<String> = row.cells.clone();
        record.push(row.checked.to_string());
        record.push(format_check_in(row.check_in));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn format_check_in(t: Option<NaiveDateTime>) -> String {
    t.map(|t| t.format(CHECK_IN_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_flag(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "1" | "yes" | "y")
}

fn parse_check_in(s: &str) -> Result<Option<NaiveDateTime>, chrono::ParseError> {
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(s, CHECK_IN_FORMAT).map(Some)
}
