//! Raw key-value access on the `kv` table.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::{OptionalExtension, params};

pub fn read_raw(pool: &DbPool, key: &str) -> AppResult<Option<String>> {
    let value = pool
        .conn
        .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

/// Insert or overwrite the value stored under `key`.
pub fn write_raw(pool: &DbPool, key: &str, value: &str) -> AppResult<()> {
    let mut stmt = pool.conn.prepare_cached(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )?;
    stmt.execute(params![key, value, Utc::now().to_rfc3339()])?;
    Ok(())
}

/// All stored keys with their last write time, newest first.
pub fn list_keys(pool: &DbPool) -> AppResult<Vec<(String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT key, updated_at FROM kv ORDER BY updated_at DESC")?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
