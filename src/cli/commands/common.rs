use crate::config::Config;
use crate::errors::AppResult;
use crate::roster::Roster;
use crate::roster::csv_io::load_roster;
use crate::ui::panel::PanelStyle;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Resolve a roster path argument and load it.
pub fn open_roster(arg: &str) -> AppResult<(PathBuf, Roster)> {
    let path = expand_tilde(arg);
    let roster = load_roster(&path)?;
    Ok((path, roster))
}

/// Command-line columns win over the configured ones.
pub fn resolve_columns(cfg: &Config, barcode: Option<usize>, nfc: Option<usize>) -> (usize, usize) {
    (
        barcode.unwrap_or(cfg.barcode_column),
        nfc.unwrap_or(cfg.nfc_column),
    )
}

pub fn panel_style(cfg: &Config) -> PanelStyle {
    PanelStyle {
        display_columns: cfg.display_columns.clone(),
        grace_minutes: cfg.grace_minutes,
    }
}
