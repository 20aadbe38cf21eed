pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod info;
pub mod init;
pub mod log;
pub mod program;
pub mod select;
pub mod stats;
pub mod timer;
pub mod unit;
pub mod workout;

use crate::config::Config;
use crate::core::session::SessionController;
use crate::db::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{ProgramDefinition, WorkoutDayId};
use crate::store::WorkoutLogStore;

/// Open the configured database, creating the schema when needed.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let path = cfg.database_path();
    let pool = DbPool::new(&path.to_string_lossy())?;
    init_db(&pool.conn)?;
    Ok(pool)
}

pub(crate) fn load_program(cfg: &Config) -> AppResult<ProgramDefinition> {
    let path = cfg.program_file();
    ::log::debug!("loading program from {}", path.display());
    ProgramDefinition::load(&path)
}

/// Controller over the active program and its persisted log.
pub(crate) fn open_session(cfg: &Config) -> AppResult<SessionController<DbPool>> {
    let program = load_program(cfg)?;
    let store = WorkoutLogStore::open(open_pool(cfg)?, cfg.selection().storage_key())?;
    Ok(SessionController::new(store, program))
}

pub(crate) fn parse_day(day: &str) -> AppResult<WorkoutDayId> {
    day.parse()
}

/// Audit a change made through the controller. Failures are only logged.
pub(crate) fn audit(ctl: &SessionController<DbPool>, operation: &str, target: &str, message: &str) {
    crate::db::log::audit_quiet(&ctl.store().backend().conn, operation, target, message);
}
