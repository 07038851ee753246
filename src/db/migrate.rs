use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `punches` table exists.
fn punches_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='punches'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `punches` table: one row per processed scan.
fn create_punches_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS punches (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            scanned_at   TEXT NOT NULL,
            roster       TEXT NOT NULL DEFAULT '',
            code         TEXT NOT NULL,
            kind         TEXT NOT NULL CHECK(kind IN ('manual','barcode','nfc','invalid')),
            outcome      TEXT NOT NULL,
            row          INTEGER,
            late_minutes INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_punches_scanned_at ON punches(scanned_at);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Index punches by code, used when looking up a badge's history.
fn migrate_add_code_index(conn: &Connection) -> Result<()> {
    let version = "20250610_0002_punches_code_index";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_punches_code ON punches(code);")?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added code index to punches')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !punches_table_exists(conn)? {
        create_punches_table(conn)?;
        success("Created punches table.");
    }

    migrate_add_code_index(conn)?;

    Ok(())
}
