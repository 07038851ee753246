use super::code_kind::CodeKind;
use crate::core::session::{ScanOutcome, ScanReport};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

/// One processed scan as stored in the `punches` journal table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PunchRecord {
    pub id: i64,
    pub scanned_at: NaiveDateTime, // ⇔ punches.scanned_at (TEXT "YYYY-MM-DD HH:MM:SS")
    pub roster: String,            // ⇔ punches.roster (roster file the scan was applied to)
    pub code: String,              // ⇔ punches.code (normalized, or raw when invalid)
    pub kind: CodeKind,            // ⇔ punches.kind
    pub outcome: String,           // ⇔ punches.outcome
    pub row: Option<i64>,          // ⇔ punches.row (matched / assigned row)
    pub late_minutes: Option<i64>, // ⇔ punches.late_minutes
}

impl PunchRecord {
    /// Journal entry for a scan report. `id` is assigned on insert.
    pub fn from_report(report: &ScanReport, roster: &str) -> Self {
        let (row, late_minutes, scanned_at) = match &report.outcome {
            ScanOutcome::Punched(p) => (Some(p.row as i64), Some(p.late_minutes), p.check_in),
            ScanOutcome::Assigned { row, .. } => (Some(*row as i64), None, now()),
            _ => (None, None, now()),
        };

        Self {
            id: 0,
            scanned_at,
            roster: roster.to_string(),
            code: report.code.value.clone(),
            kind: report.code.kind,
            outcome: outcome_str(&report.outcome).to_string(),
            row,
            late_minutes,
        }
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn outcome_str(outcome: &ScanOutcome) -> &'static str {
    match outcome {
        ScanOutcome::Punched(_) => "punched",
        ScanOutcome::NotFound(_) => "not_found",
        ScanOutcome::InvalidFormat(_) => "invalid",
        ScanOutcome::Assigned { .. } => "assigned",
        ScanOutcome::NoTarget(_) => "no_target",
    }
}
