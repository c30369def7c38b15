//! Persistent key/value store using redb.
//!
//! Desktop stand-in for origin-scoped browser storage: a single
//! `local_storage` table of string keys to string values.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use super::KeyValueStore;
use crate::error::ChainResult;

/// Table holding every persisted entry (key: entry name, value: entry text)
pub(crate) const LOCAL_STORAGE_TABLE: TableDefinition<&str, &str> =
    TableDefinition::new("local_storage");

/// redb-backed [`KeyValueStore`]
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<RwLock<Database>>,
}

impl RedbStore {
    /// Open (or create) the store at the given path.
    ///
    /// Creates the parent directory and the table if they don't exist.
    pub fn open(path: impl AsRef<Path>) -> ChainResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "Opened local storage");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// List all stored entries in key order
    pub fn entries(&self) -> ChainResult<Vec<(String, String)>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;

        let mut entries = Vec::new();
        for entry in table.iter()? {
            let (key, value) = entry?;
            entries.push((key.value().to_string(), value.value().to_string()));
        }
        Ok(entries)
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> ChainResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;

        match table.get(key)? {
            Some(v) => Ok(Some(v.value().to_string())),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> ChainResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> ChainResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
