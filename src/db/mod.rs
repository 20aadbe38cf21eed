pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;

use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// All schema creation goes through the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    migrate::run_pending_migrations(conn)?;
    Ok(())
}
