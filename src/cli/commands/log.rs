use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        print,
        punches,
        day,
    } = cmd
    {
        let pool = DbPool::open_ready(&cfg.database)?;

        if *print {
            LogLogic::print_log(&pool)?;
        }

        if *punches {
            let day = day
                .as_deref()
                .map(|d| {
                    NaiveDate::parse_from_str(d, "%Y-%m-%d")
                        .map_err(|_| AppError::Other(format!("Invalid date: {}", d)))
                })
                .transpose()?;
            LogLogic::print_punches(&pool, day)?;
        }
    }

    Ok(())
}
