#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rcheckin::roster::{Roster, RosterRow};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const BARCODE_COL: usize = 4;
pub const NFC_COL: usize = 5;

pub const ROSTER_CSV: &str = "\
Name,Department,Title,Barcode,NFC
Alice,Sales,Manager,A01B23456,
Bob,IT,Engineer,B12345678,1234567890
Carol,HR,Clerk,C98X76543,
";

pub fn rci() -> Command {
    cargo_bin_cmd!("rcheckin")
}

/// Create a unique journal DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcheckin.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write the sample roster to a fresh temp CSV and return its path
pub fn write_roster(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_roster.csv", name));
    fs::write(&path, ROSTER_CSV).expect("write roster");
    path.to_string_lossy().to_string()
}

fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Rows: 1 header, 2 Alice, 3 Bob, 4 Carol.
pub fn sample_roster() -> Roster {
    Roster::new(
        cells(&["Name", "Department", "Title", "Barcode", "NFC"]),
        vec![
            RosterRow::new(cells(&["Alice", "Sales", "Manager", "A01B23456", ""])),
            RosterRow::new(cells(&["Bob", "IT", "Engineer", "B12345678", "1234567890"])),
            RosterRow::new(cells(&["Carol", "HR", "Clerk", "C98X76543", ""])),
        ],
    )
}

pub fn at(date: (i32, u32, u32), h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(date.0, date.1, date.2)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

pub const DAY: (i32, u32, u32) = (2025, 3, 10);
