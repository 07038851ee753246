mod common;
use common::{DAY, at, sample_roster};

use chrono::NaiveTime;
use rcheckin::core::session::{ScanSession, SessionSettings};
use rcheckin::core::status::StatusLogic;
use rcheckin::ui::panel::{PanelStyle, render_report, verdict};

fn style() -> PanelStyle {
    PanelStyle {
        display_columns: vec![1, 2],
        grace_minutes: 5,
    }
}

fn session(roster: &rcheckin::roster::Roster) -> ScanSession {
    ScanSession::new(
        SessionSettings {
            barcode_column: 4,
            nfc_column: 5,
            overwrite: false,
            cutoff: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        },
        roster,
    )
    .unwrap()
}

#[test]
fn test_grace_period_verdict() {
    assert_eq!(verdict(-20, 5), "On time");
    assert_eq!(verdict(5, 5), "On time");
    assert_eq!(verdict(6, 5), "Late by 6 min");
    assert_eq!(verdict(1, 0), "Late by 1 min");
}

#[test]
fn test_panel_shows_configured_fields() {
    let mut roster = sample_roster();
    let mut s = session(&roster);

    let report = s.scan_at(&mut roster, "A01B23456", at(DAY, 9, 20, 0)).unwrap();
    let text = render_report(&report, &roster, &style());

    assert!(text.contains("Checked in (row 2)"));
    assert!(text.contains("Name: Alice"));
    assert!(text.contains("Department: Sales"));
    assert!(!text.contains("Manager"));
    assert!(text.contains("Late by 20 min"));
    assert!(text.contains("+00:20"));
}

#[test]
fn test_panel_failure_messages() {
    let mut roster = sample_roster();
    let mut s = session(&roster);
    let t = at(DAY, 9, 0, 0);

    let miss = s.scan_at(&mut roster, "Z00Z00000", t).unwrap();
    assert!(render_report(&miss, &roster, &style()).contains("Code not found: Z00Z00000"));

    let bad = s.scan_at(&mut roster, "??", t).unwrap();
    assert!(render_report(&bad, &roster, &style()).contains("Invalid code format: ??"));
}

#[test]
fn test_status_lists_checked_people() {
    let mut roster = sample_roster();
    let mut s = session(&roster);
    s.scan_at(&mut roster, "C98X76543", at(DAY, 8, 59, 0)).unwrap();

    let text = StatusLogic::render(&roster, &[1, 3]);
    assert!(text.starts_with("Checked in: 1/3 (missing 2)"));
    assert!(text.contains("Carol"));
    assert!(text.contains("Clerk"));
    assert!(text.contains("08:59:00"));
    assert!(!text.contains("Alice"));

    let json = StatusLogic::render_json(&roster).unwrap();
    assert!(json.contains("\"row\": 4"));
    assert!(json.contains("2025-03-10 08:59:00"));
}
