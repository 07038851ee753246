use crate::errors::AppResult;
use crate::roster::{FIRST_DATA_ROW, RosterAccess};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

/// The row a punch landed on, snapshotted right after the check-in was written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PunchedRow {
    /// 1-based roster row.
    pub row: usize,
    pub cells: Vec<String>,
    pub check_in: NaiveDateTime,
    /// Signed minutes past the deadline; negative means early.
    pub late_minutes: i64,
}

/// Zero or one matched row. An empty result means "code not found".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchResult {
    pub matched: Option<PunchedRow>,
}

impl MatchResult {
    pub fn empty() -> Self {
        Self { matched: None }
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_none()
    }

    pub fn row(&self) -> Option<usize> {
        self.matched.as_ref().map(|m| m.row)
    }

    pub fn late_minutes(&self) -> Option<i64> {
        self.matched.as_ref().map(|m| m.late_minutes)
    }
}

/// High-level logic for recording a check-in.
pub struct PunchLogic;

impl PunchLogic {
    /// Punch `code` in `column` using the local wall clock.
    pub fn punch<R: RosterAccess + ?Sized>(
        roster: &mut R,
        column: usize,
        code: &str,
        deadline: NaiveDateTime,
    ) -> AppResult<MatchResult> {
        Self::punch_at(roster, column, code, deadline, Local::now().naive_local())
    }

    /// Punch with an explicit check-in instant.
    ///
    /// The first data row whose `column` cell equals `code` is checked in;
    /// later duplicates are left untouched. A row that was already checked
    /// gets its time overwritten.
    pub fn punch_at<R: RosterAccess + ?Sized>(
        roster: &mut R,
        column: usize,
        code: &str,
        deadline: NaiveDateTime,
        now: NaiveDateTime,
    ) -> AppResult<MatchResult> {
        let Some(row) = find_row(&*roster, column, code) else {
            return Ok(MatchResult::empty());
        };

        roster.set_checked(row, now)?;

        let cells = (1..=roster.column_count())
            .map(|c| roster.cell_at(row, c).unwrap_or_default().to_string())
            .collect();

        Ok(MatchResult {
            matched: Some(PunchedRow {
                row,
                cells,
                check_in: now,
                late_minutes: late_minutes(now, deadline),
            }),
        })
    }
}

/// First data row whose `column` cell equals `code`.
pub fn find_row<R: RosterAccess + ?Sized>(roster: &R, column: usize, code: &str) -> Option<usize> {
    (FIRST_DATA_ROW..=roster.row_count()).find(|&row| roster.cell_at(row, column) == Some(code))
}

/// Minutes between the deadline and the check-in, rounded to the nearest minute.
pub fn late_minutes(check_in: NaiveDateTime, deadline: NaiveDateTime) -> i64 {
    let secs = (check_in - deadline).num_seconds();
    (secs as f64 / 60.0).round() as i64
}
