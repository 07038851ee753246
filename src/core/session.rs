//! Scan routing for the check-in terminal.
//!
//! A `ScanSession` carries the operator's explicit settings and the row of
//! the latest successful punch, and routes each classified scan to either
//! the punch resolver or the card assigner.

use crate::core::card::CardLogic;
use crate::core::classifier::classify;
use crate::core::deadline::deadline_for;
use crate::core::highlight::{HighlightEvent, HighlightSpec, plan_highlights};
use crate::core::punch::{PunchLogic, PunchedRow};
use crate::errors::AppResult;
use crate::models::code_kind::{CodeColumn, ScanCode};
use crate::roster::{RosterAccess, validate_column};
use chrono::{Local, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub barcode_column: usize,
    pub nfc_column: usize,
    /// Assign scanned NFC tags to the latest punched row instead of punching.
    pub overwrite: bool,
    pub cutoff: NaiveTime,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    Punched(PunchedRow),
    /// Well-formed code that nobody in the roster owns.
    NotFound(String),
    /// Input matched none of the accepted code shapes.
    InvalidFormat(String),
    Assigned { row: usize, code: String },
    /// Overwrite mode with no punched row to assign to.
    NoTarget(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub code: ScanCode,
    pub deadline: NaiveDateTime,
    pub outcome: ScanOutcome,
    pub highlights: Vec<HighlightSpec>,
}

#[derive(Debug, Clone)]
pub struct ScanSession {
    settings: SessionSettings,
    latest: Option<usize>,
}

impl ScanSession {
    pub fn new<R: RosterAccess + ?Sized>(settings: SessionSettings, roster: &R) -> AppResult<Self> {
        validate_column(roster, settings.barcode_column)?;
        validate_column(roster, settings.nfc_column)?;
        Ok(Self {
            settings,
            latest: None,
        })
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Row of the latest successful punch, the target of card assignment.
    pub fn latest_row(&self) -> Option<usize> {
        self.latest
    }

    pub fn set_overwrite(&mut self, overwrite: bool) {
        self.settings.overwrite = overwrite;
    }

    pub fn set_cutoff(&mut self, cutoff: NaiveTime) {
        self.settings.cutoff = cutoff;
    }

    /// Change the code columns and return the recomputed column highlights.
    pub fn set_columns<R: RosterAccess + ?Sized>(
        &mut self,
        roster: &R,
        barcode_column: usize,
        nfc_column: usize,
    ) -> AppResult<Vec<HighlightSpec>> {
        validate_column(roster, barcode_column)?;
        validate_column(roster, nfc_column)?;
        self.settings.barcode_column = barcode_column;
        self.settings.nfc_column = nfc_column;
        Ok(self.column_highlights(roster))
    }

    pub fn column_highlights<R: RosterAccess + ?Sized>(&self, roster: &R) -> Vec<HighlightSpec> {
        plan_highlights(&HighlightEvent::ColumnsChanged {
            row_count: roster.row_count(),
            barcode_column: self.settings.barcode_column,
            nfc_column: self.settings.nfc_column,
        })
    }

    pub fn scan<R: RosterAccess + ?Sized>(&mut self, roster: &mut R, raw: &str) -> AppResult<ScanReport> {
        self.scan_at(roster, raw, Local::now().naive_local())
    }

    /// Process one scan as if it happened at `now`.
    pub fn scan_at<R: RosterAccess + ?Sized>(
        &mut self,
        roster: &mut R,
        raw: &str,
        now: NaiveDateTime,
    ) -> AppResult<ScanReport> {
        let code = classify(raw);
        let deadline = deadline_for(now.date(), self.settings.cutoff);

        let report = |outcome, highlights| ScanReport {
            code: code.clone(),
            deadline,
            outcome,
            highlights,
        };

        let column = match code.kind.column() {
            Some(CodeColumn::Barcode) => self.settings.barcode_column,
            Some(CodeColumn::Nfc) => self.settings.nfc_column,
            None => {
                self.latest = None;
                return Ok(report(
                    ScanOutcome::InvalidFormat(code.value.clone()),
                    Vec::new(),
                ));
            }
        };

        if self.settings.overwrite && code.kind.column() == Some(CodeColumn::Nfc) {
            let outcome = match self.latest {
                Some(row) => {
                    CardLogic::fill_card(roster, row, column, &code.value)?;
                    ScanOutcome::Assigned {
                        row,
                        code: code.value.clone(),
                    }
                }
                None => ScanOutcome::NoTarget(code.value.clone()),
            };
            return Ok(report(outcome, Vec::new()));
        }

        let result = PunchLogic::punch_at(roster, column, &code.value, deadline, now)?;
        let highlights = plan_highlights(&HighlightEvent::Punched {
            result: &result,
            column_count: roster.column_count(),
        });

        let outcome = match result.matched {
            Some(punched) => {
                self.latest = Some(punched.row);
                ScanOutcome::Punched(punched)
            }
            None => {
                self.latest = None;
                ScanOutcome::NotFound(code.value.clone())
            }
        };

        Ok(report(outcome, highlights))
    }
}
