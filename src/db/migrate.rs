use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migrations record themselves there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Key-value table holding one JSON blob per program selection.
fn migrate_create_kv_table(conn: &Connection) -> Result<()> {
    let version = "20250301_0001_create_kv_store";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    mark_applied(conn, version, "Created kv table")?;
    success(format!("Migration applied: {} → created 'kv' table", version));
    Ok(())
}

/// Index used by `db --info` to find the most recent write.
fn migrate_add_kv_updated_index(conn: &Connection) -> Result<()> {
    let version = "20250318_0002_kv_updated_at_index";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_kv_updated_at ON kv(updated_at);")?;

    mark_applied(conn, version, "Indexed kv.updated_at")?;
    success(format!("Migration applied: {} → indexed kv.updated_at", version));
    Ok(())
}

/// Public entry point: run all pending migrations in order.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_create_kv_table(conn)?;
    migrate_add_kv_updated_index(conn)?;
    Ok(())
}
