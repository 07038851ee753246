use crate::cli::commands::common::{open_roster, resolve_columns};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::highlight::{HighlightEvent, HighlightSet, plan_highlights};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::roster::{RosterAccess, validate_column};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        roster,
        file,
        barcode_col,
        nfc_col,
    } = cmd
    {
        let (_, roster) = open_roster(roster)?;
        let (barcode_column, nfc_column) = resolve_columns(cfg, *barcode_col, *nfc_col);
        validate_column(&roster, barcode_column)?;
        validate_column(&roster, nfc_column)?;

        let mut highlights = HighlightSet::new();
        highlights.apply(plan_highlights(&HighlightEvent::ColumnsChanged {
            row_count: roster.row_count(),
            barcode_column,
            nfc_column,
        }));

        let pool = DbPool::open_ready(&cfg.database)?;
        ExportLogic::export_xlsx(&pool, &roster, &highlights, &expand_tilde(file))?;
    }

    Ok(())
}
