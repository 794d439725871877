use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::migrate::applied_count;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::PathBuf;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database and all pending migrations
///  - an empty staff directory template
pub fn handle(cli: &Cli) -> AppResult<()> {
    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    let cfg = Config::init_all(cli.db.clone(), &config_path, cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing rAttendance…");
    println!("📄 Config file : {}", config_path.display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!(
        "✅ Database initialized at {} ({} migration(s) applied)",
        &db_path,
        applied_count(&conn)?
    );

    // Log interno (non bloccante)
    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 rAttendance initialization completed!");
    Ok(())
}
