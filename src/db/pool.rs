//! SQLite connection wrapper (lightweight for CLI usage).

use rusqlite::{Connection, Result};
use std::fs;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file, creating its folder if needed.
    pub fn new(path: &str) -> Result<Self> {
        let p = Path::new(path);
        if let Some(parent) = p.parent()
            && !parent.as_os_str().is_empty()
        {
            // a missing folder surfaces as a rusqlite open error below
            let _ = fs::create_dir_all(parent);
        }
        let conn = Connection::open(p)?;
        Ok(Self { conn })
    }

    /// Private in-memory database, used by tests.
    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }
}
