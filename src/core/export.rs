use crate::core::highlight::HighlightSet;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::roster::Roster;
use crate::roster::xlsx::export_roster_xlsx;
use crate::ui::messages::{info, success};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the roster with the given highlights and journal the export.
    pub fn export_xlsx(
        pool: &DbPool,
        roster: &Roster,
        highlights: &HighlightSet,
        path: &Path,
    ) -> AppResult<()> {
        info(format!("Exporting to XLSX: {}", path.display()));

        export_roster_xlsx(roster, highlights, path)?;

        ttlog_soft(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} highlighted range(s)", highlights.len()),
        );

        success(format!("XLSX export completed: {}", path.display()));
        Ok(())
    }
}
