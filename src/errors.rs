//! Unified application error type.
//! Roster, engine, journal and CLI code all return AppError so failures
//! surface the same way in `main`.
//!
//! A rejected scan format or a code that matches nobody are NOT errors:
//! they are ordinary scan outcomes (see `core::session::ScanOutcome`).

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Journal database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Roster persistence
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Roster error: {0}")]
    Roster(String),

    // ---------------------------
    // Parsing / boundary checks
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Column {column} is outside the roster (1..={max})")]
    InvalidColumn { column: usize, max: usize },

    #[error("Row {row} is outside the roster (1..={max})")]
    InvalidRow { row: usize, max: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
