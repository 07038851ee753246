use crate::errors::{AppError, AppResult};
use crate::roster::{PunchStats, Roster, punch_stats};
use crate::ui::panel::progress_line;
use crate::utils::table::Table;
use crate::utils::time::format_check_in;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StatusJson<'a> {
    stats: PunchStats,
    checked: Vec<CheckedJson<'a>>,
}

#[derive(Debug, Serialize)]
struct CheckedJson<'a> {
    row: usize,
    cells: &'a [String],
    check_in: String,
}

pub struct StatusLogic;

impl StatusLogic {
    /// Progress line plus a table of the people already checked in.
    pub fn render(roster: &Roster, display_columns: &[usize]) -> String {
        let stats = punch_stats(roster);
        let mut out = format!("{}\n", progress_line(&stats));

        if stats.checked == 0 {
            return out;
        }

        let mut headers = vec!["row".to_string()];
        headers.extend(display_columns.iter().map(|&c| roster.column_title(c).to_string()));
        headers.push("check-in".to_string());

        let mut table = Table::new(headers);
        for (row, data) in roster.data_rows().filter(|(_, r)| r.checked) {
            let mut cells = vec![row.to_string()];
            cells.extend(display_columns.iter().map(|&c| {
                c.checked_sub(1)
                    .and_then(|i| data.cells.get(i))
                    .cloned()
                    .unwrap_or_default()
            }));
            cells.push(format_check_in(data.check_in));
            table.add_row(cells);
        }

        out.push('\n');
        out.push_str(&table.render());
        out
    }

    pub fn render_json(roster: &Roster) -> AppResult<String> {
        let status = StatusJson {
            stats: punch_stats(roster),
            checked: roster
                .data_rows()
                .filter(|(_, r)| r.checked)
                .map(|(row, r)| CheckedJson {
                    row,
                    cells: &r.cells,
                    check_in: crate::roster::csv_io::format_check_in(r.check_in),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&status).map_err(|e| AppError::Other(e.to_string()))
    }
}
