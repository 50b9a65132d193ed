use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::{DataError, StorageError};
use crate::storage::KeyValueStore;
use crate::stores::Collection;
use crate::types::{NewSceObject, SceObject, SceObjectPatch};

/// ObjectStore manages the anomalous-object catalog
pub struct ObjectStore {
    collection: Collection<SceObject>,
}

impl ObjectStore {
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        Ok(Self {
            collection: Collection::load(kv)?,
        })
    }

    pub fn list(&self) -> &[SceObject] {
        self.collection.list()
    }

    pub fn get(&self, id: &str) -> Option<&SceObject> {
        self.collection.get(id)
    }

    /// Create a catalog entry with a fresh id and both timestamps set to now.
    pub fn create(&mut self, draft: NewSceObject) -> Result<SceObject, StorageError> {
        let now = Utc::now();
        let object = SceObject {
            id: Uuid::new_v4().to_string(),
            number: draft.number,
            name: draft.name,
            classification: draft.classification,
            containment_class: draft.containment_class,
            disruption_class: draft.disruption_class,
            risk_class: draft.risk_class,
            description: draft.description,
            special_containment_procedures: draft.special_containment_procedures,
            author: draft.author,
            created_at: now,
            updated_at: now,
        };
        self.collection.insert(object.clone())?;
        Ok(object)
    }

    /// Shallow-merge a patch and refresh `updated_at`.
    pub fn update(&mut self, id: &str, patch: SceObjectPatch) -> Result<SceObject, DataError> {
        self.collection.update_with("SCE object", id, |object| {
            patch.apply(object);
            object.updated_at = Utc::now();
        })
    }

    /// Idempotent delete.
    pub fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        self.collection.remove(id)
    }
}
