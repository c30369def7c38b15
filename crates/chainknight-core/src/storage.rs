//! Local key/value storage.
//!
//! The access gate persists two entries, the last accepted access key and
//! the gating flag. Storage is injected through [`KeyValueStore`] so the gate
//! can run against an in-memory map in tests and against redb in the apps.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::ChainResult;

mod redb_store;

pub use redb_store::RedbStore;

/// File name of the redb store inside the data directory
pub const STORE_FILE: &str = "local_storage.redb";

/// Entry holding the last accepted access key
pub const ACCESS_KEY_ENTRY: &str = "chainknight_access_key";

/// Entry holding the gating flag (`"true"` / `"false"`, absent means enabled)
pub const GATE_ENABLED_ENTRY: &str = "chainknight_gate_enabled";

/// String key/value store scoped to one installation.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. Returns `None` if the key was never set or was removed.
    fn get(&self, key: &str) -> ChainResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> ChainResult<()>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> ChainResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> ChainResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> ChainResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> ChainResult<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> ChainResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> ChainResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> ChainResult<()> {
        (**self).remove(key)
    }
}

/// Volatile store backed by a `HashMap`.
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// the gate wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ChainResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ChainResult<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ChainResult<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
