use crate::core::highlight::HighlightSet;
use crate::core::session::{ScanOutcome, ScanReport, ScanSession};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::insert_punch;
use crate::errors::AppResult;
use crate::models::punch_record::PunchRecord;
use crate::roster::{Roster, punch_stats};
use crate::ui::messages::warning;
use crate::ui::panel::{PanelStyle, is_on_time, progress_line, render_report};
use std::io::BufRead;

/// Everything a running terminal needs besides the roster itself.
pub struct CheckinDesk<'a> {
    pub session: ScanSession,
    pub highlights: HighlightSet,
    pub pool: &'a DbPool,
    pub roster_name: String,
    pub style: PanelStyle,
}

/// High-level logic for the `scan` command.
pub struct CheckinLogic;

impl CheckinLogic {
    /// Process one scan: route it, journal it, track highlights, print the panel.
    pub fn process(desk: &mut CheckinDesk<'_>, roster: &mut Roster, raw: &str) -> AppResult<ScanReport> {
        let report = desk.session.scan(roster, raw)?;
        desk.highlights.apply(report.highlights.iter().cloned());

        journal(desk, &report);

        println!("{}", render_report(&report, roster, &desk.style));
        println!("{}\n", progress_line(&punch_stats(roster)));

        Ok(report)
    }

    /// Feed every non-empty line of `input` to the desk until EOF.
    /// Returns the number of scans processed.
    ///
    /// Lines are read as raw bytes; undecodable bytes become U+FFFD and the
    /// scan is then classified as an invalid code like any other garbage.
    pub fn run_lines<B: BufRead>(
        desk: &mut CheckinDesk<'_>,
        roster: &mut Roster,
        input: B,
    ) -> AppResult<usize> {
        let mut count = 0;
        for line in input.split(b'\n') {
            let bytes = line?;
            let line = String::from_utf8_lossy(&bytes);
            if line.trim().is_empty() {
                continue;
            }
            Self::process(desk, roster, &line)?;
            count += 1;
        }
        Ok(count)
    }
}

/// Record the scan in the journal. Failures are reported, never raised.
fn journal(desk: &CheckinDesk<'_>, report: &ScanReport) {
    let conn = &desk.pool.conn;

    let rec = PunchRecord::from_report(report, &desk.roster_name);
    if let Err(e) = insert_punch(conn, &rec) {
        warning(format!("Failed to journal scan: {}", e));
    }

    let code = report.code.value.as_str();
    match &report.outcome {
        ScanOutcome::Punched(p) => {
            let op = if is_on_time(p.late_minutes, desk.style.grace_minutes) {
                "punch"
            } else {
                "late"
            };
            ttlog_soft(
                conn,
                op,
                code,
                &format!("row {} checked in, {} min vs deadline", p.row, p.late_minutes),
            );
        }
        ScanOutcome::NotFound(_) => ttlog_soft(conn, "miss", code, "code not found"),
        ScanOutcome::InvalidFormat(_) => ttlog_soft(conn, "invalid", code, "invalid code format"),
        ScanOutcome::Assigned { row, .. } => {
            ttlog_soft(conn, "fill", code, &format!("card assigned to row {}", row))
        }
        ScanOutcome::NoTarget(_) => ttlog_soft(conn, "no_target", code, "no row to assign card to"),
    }
}
