use std::sync::Arc;

use crate::errors::{DataError, StorageError};
use crate::storage::KeyValueStore;
use crate::types::Record;

/// A persisted entity collection with an in-memory cache
///
/// The whole collection is one serialized document under the record's
/// reserved key. Every mutation rewrites the full document; collections are
/// small and scanned linearly, so there is no pagination or indexing. The
/// cache only takes a mutation once the corresponding write has succeeded,
/// keeping memory and store in step.
pub struct Collection<T: Record> {
    kv: Arc<dyn KeyValueStore>,
    records: Vec<T>,
}

impl<T: Record> Collection<T> {
    /// Load the collection from the store; an absent key is an empty
    /// collection, not an error.
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        let records = match kv.get(T::STORE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StorageError::Deserialize {
                key: T::STORE_KEY.to_string(),
                source: e,
            })?,
            None => Vec::new(),
        };
        Ok(Self { kv, records })
    }

    /// All records, stored (insertion) order.
    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Append a record and rewrite the collection.
    pub fn insert(&mut self, record: T) -> Result<(), StorageError> {
        self.records.push(record);
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Apply `mutate` to the record with `id` and rewrite the collection
    ///
    /// # Errors
    /// `DataError::NotFound` (tagged with `entity`) when no record matches;
    /// `DataError::Storage` when the rewrite fails, in which case the cached
    /// record is rolled back to its previous value.
    pub fn update_with(
        &mut self,
        entity: &'static str,
        id: &str,
        mutate: impl FnOnce(&mut T),
    ) -> Result<T, DataError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| DataError::not_found(entity, id))?;

        let mut updated = self.records[index].clone();
        mutate(&mut updated);
        let previous = std::mem::replace(&mut self.records[index], updated.clone());
        if let Err(e) = self.persist() {
            self.records[index] = previous;
            return Err(e.into());
        }
        Ok(updated)
    }

    /// Remove the record with `id`, if present
    ///
    /// Deleting an absent id is a no-op, matching the unconditional-filter
    /// delete semantics of the portal.
    pub fn remove(&mut self, id: &str) -> Result<(), StorageError> {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            return Ok(());
        };
        let removed = self.records.remove(index);
        if let Err(e) = self.persist() {
            self.records.insert(index, removed);
            return Err(e);
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.records).map_err(|e| StorageError::Serialize {
            key: T::STORE_KEY.to_string(),
            source: e,
        })?;
        self.kv.set(T::STORE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::storage::MemoryStore;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Marker {
        id: String,
        label: String,
    }

    impl Record for Marker {
        const STORE_KEY: &'static str = "test_markers";

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn marker(id: &str, label: &str) -> Marker {
        Marker {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn loads_empty_when_key_is_absent() {
        let kv = Arc::new(MemoryStore::new());
        let collection = Collection::<Marker>::load(kv).unwrap();
        assert!(collection.list().is_empty());
    }

    #[test]
    fn insert_persists_and_preserves_insertion_order() {
        let kv = Arc::new(MemoryStore::new());
        let mut collection = Collection::load(kv.clone()).unwrap();
        collection.insert(marker("a", "first")).unwrap();
        collection.insert(marker("b", "second")).unwrap();

        let reloaded = Collection::<Marker>::load(kv).unwrap();
        let ids: Vec<&str> = reloaded.list().iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn update_with_unknown_id_is_not_found() {
        let kv = Arc::new(MemoryStore::new());
        let mut collection = Collection::<Marker>::load(kv).unwrap();
        let err = collection
            .update_with("marker", "missing", |_| {})
            .unwrap_err();
        assert!(matches!(err, DataError::NotFound { entity: "marker", .. }));
    }

    #[test]
    fn update_with_mutates_only_the_matching_record() {
        let kv = Arc::new(MemoryStore::new());
        let mut collection = Collection::load(kv).unwrap();
        collection.insert(marker("a", "first")).unwrap();
        collection.insert(marker("b", "second")).unwrap();

        let updated = collection
            .update_with("marker", "b", |m| m.label = "edited".to_string())
            .unwrap();
        assert_eq!(updated.label, "edited");
        assert_eq!(collection.get("a").unwrap().label, "first");
    }

    #[test]
    fn remove_twice_does_not_fail() {
        let kv = Arc::new(MemoryStore::new());
        let mut collection = Collection::load(kv).unwrap();
        collection.insert(marker("a", "first")).unwrap();
        collection.remove("a").unwrap();
        collection.remove("a").unwrap();
        assert!(collection.get("a").is_none());
    }
}
