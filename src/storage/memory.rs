use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::KeyValueStore;
use crate::errors::StorageError;

/// In-memory key-value store
///
/// Default backing when no data directory is configured, and the backing for
/// tests. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_as_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("sce_users").unwrap(), None);
    }

    #[test]
    fn set_then_get_returns_the_document() {
        let store = MemoryStore::new();
        store.set("sce_news", "[]").unwrap();
        assert_eq!(store.get("sce_news").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set("sce_user", "{}").unwrap();
        store.remove("sce_user").unwrap();
        store.remove("sce_user").unwrap();
        assert_eq!(store.get("sce_user").unwrap(), None);
    }
}
