use crate::cli::commands::open_pool;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file
///  - the SQLite database with all pending migrations
///  - the bundled program files
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    cfg.validate()?;

    println!("⚙️  Initializing hybridops…");
    cfg.init_all(cli.test)?;

    let pool = open_pool(cfg)?;
    let db_path = cfg.database_path();
    println!("✅ Database initialized at {}", db_path.display());

    log::audit_quiet(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path.display()),
    );

    println!("🎉 hybridops initialization completed!");
    Ok(())
}
