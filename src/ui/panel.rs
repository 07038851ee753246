//! Message panel shown to the operator after every scan.

use crate::core::punch::PunchedRow;
use crate::core::session::{ScanOutcome, ScanReport};
use crate::roster::{PunchStats, Roster};
use crate::utils::formatting::mins2readable;
use ansi_term::Colour;
use chrono::NaiveDateTime;

/// Panel options taken from the configuration.
#[derive(Debug, Clone)]
pub struct PanelStyle {
    pub display_columns: Vec<usize>,
    pub grace_minutes: i64,
}

/// On time when at most `grace_minutes` past the deadline.
pub fn is_on_time(late_minutes: i64, grace_minutes: i64) -> bool {
    late_minutes <= grace_minutes
}

pub fn verdict(late_minutes: i64, grace_minutes: i64) -> String {
    if is_on_time(late_minutes, grace_minutes) {
        "On time".to_string()
    } else {
        format!("Late by {} min", late_minutes)
    }
}

pub fn fail_panel(scan: &str, reason: &str) -> String {
    format!(
        "{}\n  {}: {}",
        Colour::Red.bold().paint("Scan failed"),
        reason,
        scan
    )
}

pub fn okay_panel(
    punched: &PunchedRow,
    deadline: NaiveDateTime,
    roster: &Roster,
    style: &PanelStyle,
) -> String {
    let mut out = String::new();

    let fields: Vec<(&str, &str)> = style
        .display_columns
        .iter()
        .filter_map(|&c| {
            let value = punched.cells.get(c.checked_sub(1)?)?;
            Some((roster.column_title(c), value.as_str()))
        })
        .collect();

    let key_w = fields.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    for (key, value) in fields {
        out.push_str(&format!("  {:>key_w$}: {}\n", key, value, key_w = key_w));
    }

    let late = punched.late_minutes;
    let line = format!(
        "{} ({} vs {}, {})",
        verdict(late, style.grace_minutes),
        punched.check_in.format("%H:%M:%S"),
        deadline.format("%H:%M"),
        mins2readable(late, true, true)
    );
    let colour = if is_on_time(late, style.grace_minutes) {
        Colour::Green
    } else {
        Colour::Red
    };
    out.push_str(&format!("  {}", colour.bold().paint(line)));
    out
}

/// Render a scan report for the terminal.
pub fn render_report(report: &ScanReport, roster: &Roster, style: &PanelStyle) -> String {
    match &report.outcome {
        ScanOutcome::Punched(p) => {
            format!(
                "{}\n{}",
                Colour::Green.bold().paint(format!("Checked in (row {})", p.row)),
                okay_panel(p, report.deadline, roster, style)
            )
        }
        ScanOutcome::NotFound(code) => fail_panel(code, "Code not found"),
        ScanOutcome::InvalidFormat(raw) => fail_panel(raw, "Invalid code format"),
        ScanOutcome::Assigned { row, code } => format!(
            "{}\n  {} -> row {}",
            Colour::Cyan.bold().paint("Card assigned"),
            code,
            row
        ),
        ScanOutcome::NoTarget(code) => fail_panel(code, "No checked-in person to assign the card to"),
    }
}

pub fn progress_line(stats: &PunchStats) -> String {
    format!(
        "Checked in: {}/{} (missing {})",
        stats.checked,
        stats.total,
        stats.missing()
    )
}
