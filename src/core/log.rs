use crate::db::pool::DbPool;
use crate::db::queries::load_punches;
use crate::errors::AppResult;
use crate::utils::table::Table;
use ansi_term::Colour;
use chrono::NaiveDate;

const MAX_OP_WIDTH: usize = 40;

/// ANSI color for a journal operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "punch" => Colour::Green,
        "late" => Colour::Yellow,
        "miss" | "invalid" => Colour::Red,
        "fill" => Colour::Cyan,
        "no_target" => Colour::Purple,
        "save" | "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Cut to `max` visible chars, ending with "..." when shortened.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut t: String = s.chars().take(max - 3).collect();
    t.push_str("...");
    t
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: Option<String> = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target.unwrap_or_default(), message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| visible_op_target(op, target).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let visible = visible_op_target(&operation, &target);
            let padding = " ".repeat(op_w.saturating_sub(visible.chars().count()));

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color_for_operation(&operation).paint(op), rest),
                None => color_for_operation(&operation).paint(visible.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }

    /// Print the scans journal, optionally for a single day.
    pub fn print_punches(pool: &DbPool, day: Option<NaiveDate>) -> AppResult<()> {
        let records = load_punches(&pool.conn, day)?;

        if records.is_empty() {
            println!("📋 No scans recorded.");
            return Ok(());
        }

        let mut table = Table::new(
            ["id", "scanned at", "code", "kind", "outcome", "row", "late"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );

        for r in &records {
            table.add_row(vec![
                r.id.to_string(),
                r.scanned_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                r.code.clone(),
                r.kind.as_str().to_string(),
                r.outcome.clone(),
                r.row.map(|v| v.to_string()).unwrap_or_default(),
                r.late_minutes.map(|v| v.to_string()).unwrap_or_default(),
            ]);
        }

        println!("📋 Scans journal:\n");
        print!("{}", table.render());
        Ok(())
    }
}

fn visible_op_target(op: &str, target: &str) -> String {
    let s = if target.is_empty() {
        op.to_string()
    } else {
        format!("{op} ({target})")
    };
    truncate(&s, MAX_OP_WIDTH)
}
