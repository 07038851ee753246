use crate::cli::commands::common::{open_roster, panel_style, resolve_columns};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::{CheckinDesk, CheckinLogic};
use crate::core::deadline::parse_cutoff;
use crate::core::export::ExportLogic;
use crate::core::highlight::HighlightSet;
use crate::core::session::{ScanSession, SessionSettings};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::roster::csv_io::save_roster;
use crate::roster::{RosterAccess, punch_stats};
use crate::ui::messages::{info, success, warning};
use crate::ui::panel::progress_line;
use crate::utils::path::expand_tilde;
use std::io;

/// Run the check-in desk over the given codes, or over stdin.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan {
        roster,
        deadline,
        barcode_col,
        nfc_col,
        overwrite,
        out,
        xlsx,
        codes,
    } = cmd
    {
        //
        // 1. Roster and operator settings
        //
        let (roster_path, mut roster) = open_roster(roster)?;
        let (barcode_column, nfc_column) = resolve_columns(cfg, *barcode_col, *nfc_col);
        let cutoff = parse_cutoff(deadline.as_deref().unwrap_or(&cfg.deadline))?;

        let settings = SessionSettings {
            barcode_column,
            nfc_column,
            overwrite: *overwrite || cfg.overwrite,
            cutoff,
        };
        let session = ScanSession::new(settings, &roster)?;

        let mut highlights = HighlightSet::new();
        highlights.apply(session.column_highlights(&roster));

        //
        // 2. Journal
        //
        let pool = DbPool::open_ready(&cfg.database)?;

        let mut desk = CheckinDesk {
            session,
            highlights,
            pool: &pool,
            roster_name: roster_path.to_string_lossy().to_string(),
            style: panel_style(cfg),
        };

        info(format!(
            "Roster: {} ({} people), deadline {}",
            roster_path.display(),
            roster.row_count().saturating_sub(1),
            cutoff.format("%H:%M")
        ));
        println!("{}\n", progress_line(&punch_stats(&roster)));

        //
        // 3. Scans
        //
        let scanned = if codes.is_empty() {
            let stdin = io::stdin();
            CheckinLogic::run_lines(&mut desk, &mut roster, stdin.lock())
        } else {
            codes.iter().try_fold(0, |n, code| {
                CheckinLogic::process(&mut desk, &mut roster, code).map(|_| n + 1)
            })
        };

        //
        // 4. Persist, even when the scan loop stopped early
        //
        let save_path = out.as_deref().map(expand_tilde).unwrap_or(roster_path);
        save_roster(&roster, &save_path)?;
        let processed = match scanned {
            Ok(n) => n,
            Err(e) => {
                warning(format!(
                    "Scanning stopped early; punches so far saved to {}",
                    save_path.display()
                ));
                ttlog_soft(
                    &pool.conn,
                    "save",
                    &save_path.to_string_lossy(),
                    "partial save after error",
                );
                return Err(e);
            }
        };
        ttlog_soft(
            &pool.conn,
            "save",
            &save_path.to_string_lossy(),
            &format!("{} scan(s) processed", processed),
        );
        success(format!(
            "Roster saved to {} ({} scan(s))",
            save_path.display(),
            processed
        ));

        if let Some(x) = xlsx {
            ExportLogic::export_xlsx(&pool, &roster, &desk.highlights, &expand_tilde(x))?;
        }
    }

    Ok(())
}
