mod common;
use common::{BARCODE_COL, DAY, NFC_COL, at, sample_roster};

use chrono::NaiveTime;
use rcheckin::core::highlight::LATEST_RANGE;
use rcheckin::core::session::{ScanOutcome, ScanSession, SessionSettings};
use rcheckin::errors::AppError;
use rcheckin::models::code_kind::CodeKind;
use rcheckin::roster::RosterAccess;

fn settings(overwrite: bool) -> SessionSettings {
    SessionSettings {
        barcode_column: BARCODE_COL,
        nfc_column: NFC_COL,
        overwrite,
        cutoff: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    }
}

#[test]
fn test_barcode_scan_punches_and_highlights() {
    let mut roster = sample_roster();
    let mut session = ScanSession::new(settings(false), &roster).unwrap();

    let report = session
        .scan_at(&mut roster, "a01b234567", at(DAY, 9, 12, 0))
        .unwrap();

    assert_eq!(report.code.kind, CodeKind::BarcodeAlnum);
    assert_eq!(report.deadline, at(DAY, 9, 0, 0));
    match &report.outcome {
        ScanOutcome::Punched(p) => {
            assert_eq!(p.row, 2);
            assert_eq!(p.late_minutes, 12);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(report.highlights.len(), 1);
    assert_eq!(report.highlights[0].name, LATEST_RANGE);
    assert_eq!(session.latest_row(), Some(2));
}

#[test]
fn test_deadline_follows_scan_date() {
    let mut roster = sample_roster();
    let mut session = ScanSession::new(settings(false), &roster).unwrap();

    let next_day = (DAY.0, DAY.1, DAY.2 + 1);
    let report = session
        .scan_at(&mut roster, "1234567890", at(next_day, 8, 55, 0))
        .unwrap();

    assert_eq!(report.deadline, at(next_day, 9, 0, 0));
    assert!(matches!(report.outcome, ScanOutcome::Punched(ref p) if p.late_minutes == -5));
}

#[test]
fn test_unknown_and_invalid_clear_latest() {
    let mut roster = sample_roster();
    let mut session = ScanSession::new(settings(false), &roster).unwrap();
    let t = at(DAY, 9, 0, 0);

    session.scan_at(&mut roster, "B12345678", t).unwrap();
    assert_eq!(session.latest_row(), Some(3));

    let miss = session.scan_at(&mut roster, "Z00Z00000", t).unwrap();
    assert_eq!(miss.outcome, ScanOutcome::NotFound("Z00Z00000".into()));
    assert!(miss.highlights.is_empty());
    assert_eq!(session.latest_row(), None);

    session.scan_at(&mut roster, "B12345678", t).unwrap();
    let bad = session.scan_at(&mut roster, "hello", t).unwrap();
    assert_eq!(bad.outcome, ScanOutcome::InvalidFormat("hello".into()));
    assert_eq!(bad.code.kind, CodeKind::Invalid);
    assert_eq!(session.latest_row(), None);
}

#[test]
fn test_overwrite_assigns_nfc_to_latest_row() {
    let mut roster = sample_roster();
    let mut session = ScanSession::new(settings(true), &roster).unwrap();

    // barcodes still punch in overwrite mode
    session
        .scan_at(&mut roster, "C98X76543", at(DAY, 9, 4, 0))
        .unwrap();
    assert_eq!(session.latest_row(), Some(4));

    let report = session
        .scan_at(&mut roster, "9999999999", at(DAY, 9, 30, 0))
        .unwrap();

    assert_eq!(
        report.outcome,
        ScanOutcome::Assigned {
            row: 4,
            code: "9999999999".into()
        }
    );
    assert!(report.highlights.is_empty());
    assert_eq!(roster.cell_at(4, NFC_COL), Some("9999999999"));
    assert_eq!(roster.check_in_time(4), Some(at(DAY, 9, 4, 0)));
}

#[test]
fn test_overwrite_without_target_is_rejected() {
    let mut roster = sample_roster();
    let before = roster.clone();
    let mut session = ScanSession::new(settings(true), &roster).unwrap();

    let report = session
        .scan_at(&mut roster, "9999999999", at(DAY, 9, 0, 0))
        .unwrap();

    assert_eq!(report.outcome, ScanOutcome::NoTarget("9999999999".into()));
    assert_eq!(roster, before);
}

#[test]
fn test_out_of_range_columns_are_rejected() {
    let roster = sample_roster();

    let mut s = settings(false);
    s.barcode_column = 0;
    assert!(matches!(
        ScanSession::new(s, &roster),
        Err(AppError::InvalidColumn { column: 0, max: 5 })
    ));

    let mut s = settings(false);
    s.nfc_column = 6;
    assert!(matches!(
        ScanSession::new(s, &roster),
        Err(AppError::InvalidColumn { column: 6, max: 5 })
    ));
}

#[test]
fn test_set_columns_recomputes_highlights() {
    let mut roster = sample_roster();
    let mut session = ScanSession::new(settings(false), &roster).unwrap();

    let specs = session.set_columns(&roster, 1, 2).unwrap();
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].cols, (1, 1));
    assert_eq!(specs[1].cols, (2, 2));
    assert_eq!(specs[0].rows, (2, roster.row_count()));

    // names now live in the "barcode" column
    let report = session.scan_at(&mut roster, "A01B23456", at(DAY, 9, 0, 0)).unwrap();
    assert!(matches!(report.outcome, ScanOutcome::NotFound(_)));

    assert!(session.set_columns(&roster, 1, 7).is_err());
    assert_eq!(session.settings().nfc_column, 2);
}

#[test]
fn test_changing_cutoff_moves_deadline() {
    let mut roster = sample_roster();
    let mut session = ScanSession::new(settings(false), &roster).unwrap();
    session.set_cutoff(NaiveTime::from_hms_opt(8, 30, 0).unwrap());

    let report = session
        .scan_at(&mut roster, "B12345678", at(DAY, 8, 45, 0))
        .unwrap();

    assert_eq!(report.deadline, at(DAY, 8, 30, 0));
    assert!(matches!(report.outcome, ScanOutcome::Punched(ref p) if p.late_minutes == 15));

    // turning overwrite on mid-session reuses the latest punched row
    session.set_overwrite(true);
    let report = session
        .scan_at(&mut roster, "4444444444", at(DAY, 8, 46, 0))
        .unwrap();
    assert_eq!(
        report.outcome,
        ScanOutcome::Assigned {
            row: 3,
            code: "4444444444".into()
        }
    );
}
