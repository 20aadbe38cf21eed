//! Durable key-value persistence behind the workout log store.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use std::collections::HashMap;

/// Raw string storage keyed by namespaced strings such as
/// `log_hybridAthlete_beginner`.
pub trait KvBackend {
    fn read_raw(&self, key: &str) -> AppResult<Option<String>>;
    fn write_raw(&mut self, key: &str, value: &str) -> AppResult<()>;
}

impl KvBackend for DbPool {
    fn read_raw(&self, key: &str) -> AppResult<Option<String>> {
        queries::read_raw(self, key)
    }

    fn write_raw(&mut self, key: &str, value: &str) -> AppResult<()> {
        queries::write_raw(self, key, value)
    }
}

/// Volatile backend for tests and throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    pub entries: HashMap<String, String>,
    pub writes: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryBackend {
    fn read_raw(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write_raw(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
