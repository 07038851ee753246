mod common;
use common::{BARCODE_COL, DAY, NFC_COL, ROSTER_CSV, at, sample_roster};

use chrono::NaiveTime;
use rcheckin::core::session::{ScanSession, SessionSettings};
use rcheckin::db::pool::DbPool;
use rcheckin::db::queries::{insert_punch, load_punches, load_punches_by_code};
use rcheckin::models::code_kind::CodeKind;
use rcheckin::models::punch_record::PunchRecord;
use rcheckin::roster::csv_io::{read_roster, write_roster};
use rcheckin::roster::{RosterAccess, punch_stats, validate_column};

#[test]
fn test_read_plain_roster() {
    let roster = read_roster(ROSTER_CSV.as_bytes()).unwrap();

    assert_eq!(roster.row_count(), 4);
    assert_eq!(roster.column_count(), 5);
    assert_eq!(roster.cell_at(1, 4), Some("Barcode"));
    assert_eq!(roster.cell_at(3, 5), Some("1234567890"));
    assert_eq!(roster.cell_at(2, 5), Some(""));
    assert_eq!(roster.cell_at(5, 1), None);
    assert_eq!(roster.cell_at(2, 6), None);
    assert_eq!(roster.cell_at(2, 0), None);
    assert_eq!(roster, sample_roster());
}

#[test]
fn test_short_rows_are_padded() {
    let roster = read_roster("Name,Dept,Code\nAlice\nBob,IT\n".as_bytes()).unwrap();
    assert_eq!(roster.column_count(), 3);
    assert_eq!(roster.cell_at(2, 3), Some(""));
    assert_eq!(roster.cell_at(3, 2), Some("IT"));
}

#[test]
fn test_rows_wider_than_header_are_rejected() {
    let err = read_roster("Name,Dept\nAlice,Sales\nBob,IT,extra\n".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("row 3"), "got: {}", err);
}

#[test]
fn test_trailing_empty_cells_are_ignored() {
    let roster = read_roster("Name,Dept\nAlice,Sales,,\n".as_bytes()).unwrap();
    assert_eq!(roster.column_count(), 2);
    assert_eq!(roster.cell_at(2, 2), Some("Sales"));
}

#[test]
fn test_check_state_survives_save_and_load() {
    let mut roster = sample_roster();
    roster.set_checked(3, at(DAY, 9, 7, 30)).unwrap();

    let mut buf = Vec::new();
    write_roster(&roster, &mut buf).unwrap();
    let text = String::from_utf8(buf.clone()).unwrap();

    assert!(text.starts_with("Name,Department,Title,Barcode,NFC,checked,check_in\n"));
    assert!(text.contains("Bob,IT,Engineer,B12345678,1234567890,true,2025-03-10 09:07:30"));

    let loaded = read_roster(buf.as_slice()).unwrap();
    assert_eq!(loaded.column_count(), 5);
    assert!(loaded.is_checked(3));
    assert_eq!(loaded.check_in_time(3), Some(at(DAY, 9, 7, 30)));
    assert!(!loaded.is_checked(2));
    assert_eq!(loaded, roster);
}

#[test]
fn test_bad_check_in_time_is_reported() {
    let csv = "Name,Code,checked,check_in\nAlice,A01B23456,true,yesterday\n";
    let err = read_roster(csv.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("row 2"));
}

#[test]
fn test_empty_file_is_rejected() {
    assert!(read_roster("".as_bytes()).is_err());
}

#[test]
fn test_validate_column_bounds() {
    let roster = sample_roster();
    assert!(validate_column(&roster, 1).is_ok());
    assert!(validate_column(&roster, 5).is_ok());
    assert!(validate_column(&roster, 0).is_err());
    assert!(validate_column(&roster, 6).is_err());
}

#[test]
fn test_punch_stats_counts_data_rows_only() {
    let mut roster = sample_roster();
    let stats = punch_stats(&roster);
    assert_eq!((stats.checked, stats.total, stats.missing()), (0, 3, 3));

    roster.set_checked(2, at(DAY, 9, 0, 0)).unwrap();
    roster.set_checked(2, at(DAY, 9, 5, 0)).unwrap();
    roster.set_checked(4, at(DAY, 9, 1, 0)).unwrap();

    let stats = punch_stats(&roster);
    assert_eq!((stats.checked, stats.total, stats.missing()), (2, 3, 1));
}

#[test]
fn test_journal_records_scans() {
    let pool = DbPool::in_memory().unwrap();
    let mut roster = sample_roster();
    let mut session = ScanSession::new(
        SessionSettings {
            barcode_column: BARCODE_COL,
            nfc_column: NFC_COL,
            overwrite: false,
            cutoff: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        },
        &roster,
    )
    .unwrap();

    for raw in ["1234567890", "nope", "A01B23456"] {
        let report = session.scan_at(&mut roster, raw, at(DAY, 9, 3, 0)).unwrap();
        insert_punch(&pool.conn, &PunchRecord::from_report(&report, "roster.csv")).unwrap();
    }

    let all = load_punches(&pool.conn, None).unwrap();
    assert_eq!(all.len(), 3);

    let today = load_punches(&pool.conn, Some(at(DAY, 0, 0, 0).date())).unwrap();
    assert_eq!(today.len(), 2);
    assert!(today.iter().all(|r| r.outcome == "punched"));

    let bob = load_punches_by_code(&pool.conn, "1234567890").unwrap();
    assert_eq!(bob.len(), 1);
    assert_eq!(bob[0].kind, CodeKind::NfcNumeric);
    assert_eq!(bob[0].row, Some(3));
    assert_eq!(bob[0].late_minutes, Some(3));
    assert_eq!(bob[0].scanned_at, at(DAY, 9, 3, 0));
    assert_eq!(bob[0].roster, "roster.csv");

    let invalid = load_punches_by_code(&pool.conn, "nope").unwrap();
    assert_eq!(invalid[0].outcome, "invalid");
    assert_eq!(invalid[0].row, None);
}
