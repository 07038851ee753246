use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the journal database and its migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rCheckin…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Journal    : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Journal initialized at {}", &db_path);

    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "Journal initialized",
        &format!("Journal initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 rCheckin initialization completed!");
    Ok(())
}
