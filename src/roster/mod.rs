//! Roster store: the tabular list of people, their badge codes and their
//! check-in state.
//!
//! The punch engine only talks to the roster through [`RosterAccess`].
//! Rows and columns are 1-based; row 1 holds the column titles.

pub mod csv_io;
pub mod xlsx;

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Number of leading title rows excluded from punch searches.
pub const HEADER_ROWS: usize = 1;

/// First row that holds a person.
pub const FIRST_DATA_ROW: usize = HEADER_ROWS + 1;

/// Narrow capability interface over the roster table.
pub trait RosterAccess {
    fn column_count(&self) -> usize;

    /// Total rows, header included.
    fn row_count(&self) -> usize;

    fn cell_at(&self, row: usize, col: usize) -> Option<&str>;

    fn set_cell(&mut self, row: usize, col: usize, value: &str) -> AppResult<()>;

    /// Mark `row` as checked in at `timestamp`. Flag and time always move together.
    fn set_checked(&mut self, row: usize, timestamp: NaiveDateTime) -> AppResult<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RosterRow {
    pub cells: Vec<String>,
    pub checked: bool,
    pub check_in: Option<NaiveDateTime>,
}

impl RosterRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            checked: false,
            check_in: None,
        }
    }
}

/// In-memory roster. `rows[0]` is the header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    rows: Vec<RosterRow>,
    columns: usize,
}

impl Roster {
    /// Build a roster from a header and data rows. Short rows are padded with
    /// empty cells so every row has `header.len()` columns.
    pub fn new(header: Vec<String>, data: Vec<RosterRow>) -> Self {
        let columns = header.len();
        let mut rows = Vec::with_capacity(data.len() + 1);
        rows.push(RosterRow::new(header));
        rows.extend(data);

        for row in rows.iter_mut() {
            row.cells.resize(columns, String::new());
        }

        Self { rows, columns }
    }

    pub fn header(&self) -> &[String] {
        self.rows
            .first()
            .map(|r| r.cells.as_slice())
            .unwrap_or_default()
    }

    /// Title of a 1-based column, empty when the roster has no such column.
    pub fn column_title(&self, col: usize) -> &str {
        self.cell_at(1, col).unwrap_or("")
    }

    pub fn row(&self, row: usize) -> Option<&RosterRow> {
        row.checked_sub(1).and_then(|i| self.rows.get(i))
    }

    /// Data rows with their 1-based row numbers.
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &RosterRow)> {
        self.rows
            .iter()
            .enumerate()
            .skip(HEADER_ROWS)
            .map(|(i, r)| (i + 1, r))
    }

    pub fn is_checked(&self, row: usize) -> bool {
        self.row(row).map(|r| r.checked).unwrap_or(false)
    }

    pub fn check_in_time(&self, row: usize) -> Option<NaiveDateTime> {
        self.row(row).and_then(|r| r.check_in)
    }

    fn row_mut(&mut self, row: usize) -> AppResult<&mut RosterRow> {
        let max = self.rows.len();
        row.checked_sub(1)
            .and_then(|i| self.rows.get_mut(i))
            .ok_or(AppError::InvalidRow { row, max })
    }
}

impl RosterAccess for Roster {
    fn column_count(&self) -> usize {
        self.columns
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell_at(&self, row: usize, col: usize) -> Option<&str> {
        let r = self.row(row)?;
        col.checked_sub(1)
            .and_then(|c| r.cells.get(c))
            .map(String::as_str)
    }

    fn set_cell(&mut self, row: usize, col: usize, value: &str) -> AppResult<()> {
        let max = self.columns;
        let r = self.row_mut(row)?;
        let cell = col
            .checked_sub(1)
            .and_then(|c| r.cells.get_mut(c))
            .ok_or(AppError::InvalidColumn { column: col, max })?;
        *cell = value.to_string();
        Ok(())
    }

    fn set_checked(&mut self, row: usize, timestamp: NaiveDateTime) -> AppResult<()> {
        let r = self.row_mut(row)?;
        r.checked = true;
        r.check_in = Some(timestamp);
        Ok(())
    }
}

/// Check that a configured code column addresses a real roster column.
pub fn validate_column<R: RosterAccess + ?Sized>(roster: &R, column: usize) -> AppResult<()> {
    let max = roster.column_count();
    if column == 0 || column > max {
        return Err(AppError::InvalidColumn { column, max });
    }
    Ok(())
}

/// Check-in progress over the data rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PunchStats {
    pub checked: usize,
    pub total: usize,
}

impl PunchStats {
    pub fn missing(&self) -> usize {
        self.total - self.checked
    }
}

pub fn punch_stats(roster: &Roster) -> PunchStats {
    let (checked, total) = roster
        .data_rows()
        .fold((0, 0), |(c, t), (_, r)| (c + usize::from(r.checked), t + 1));
    PunchStats { checked, total }
}
