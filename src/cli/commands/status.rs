use crate::cli::commands::common::open_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::errors::AppResult;

/// Show check-in progress for a roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { roster, json } = cmd {
        let (_, roster) = open_roster(roster)?;

        if *json {
            println!("{}", StatusLogic::render_json(&roster)?);
        } else {
            print!("{}", StatusLogic::render(&roster, &cfg.display_columns));
        }
    }

    Ok(())
}
