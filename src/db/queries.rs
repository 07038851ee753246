use crate::errors::AppResult;
use crate::models::code_kind::CodeKind;
use crate::models::punch_record::PunchRecord;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, Row, params};

const SCANNED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn map_row(row: &Row) -> rusqlite::Result<PunchRecord> {
    let scanned_at_str: String = row.get("scanned_at")?;
    let kind_str: String = row.get("kind")?;

    let scanned_at = NaiveDateTime::parse_from_str(&scanned_at_str, SCANNED_AT_FORMAT)
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?;

    let kind = CodeKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            format!("unknown code kind '{}'", kind_str).into(),
        )
    })?;

    Ok(PunchRecord {
        id: row.get("id")?,
        scanned_at,
        roster: row.get("roster")?,
        code: row.get("code")?,
        kind,
        outcome: row.get("outcome")?,
        row: row.get("row")?,
        late_minutes: row.get("late_minutes")?,
    })
}

/// Insert a journal entry and return its id.
pub fn insert_punch(conn: &Connection, rec: &PunchRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO punches (scanned_at, roster, code, kind, outcome, row, late_minutes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            rec.scanned_at.format(SCANNED_AT_FORMAT).to_string(),
            rec.roster,
            rec.code,
            rec.kind.as_str(),
            rec.outcome,
            rec.row,
            rec.late_minutes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Journal entries, oldest first, optionally restricted to one day.
pub fn load_punches(conn: &Connection, day: Option<NaiveDate>) -> AppResult<Vec<PunchRecord>> {
    let sql = "SELECT id, scanned_at, roster, code, kind, outcome, row, late_minutes
               FROM punches
               WHERE (?1 IS NULL OR substr(scanned_at, 1, 10) = ?1)
               ORDER BY scanned_at ASC, id ASC";

    let day_str = day.map(|d| d.format("%Y-%m-%d").to_string());

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params![day_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Journal entries for one badge code, oldest first.
pub fn load_punches_by_code(conn: &Connection, code: &str) -> AppResult<Vec<PunchRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, scanned_at, roster, code, kind, outcome, row, late_minutes
         FROM punches
         WHERE code = ?1
         ORDER BY scanned_at ASC, id ASC",
    )?;
    let rows = stmt.query_map([code], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
