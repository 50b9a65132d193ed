use std::sync::Arc;

use uuid::Uuid;

use crate::errors::{DataError, StorageError};
use crate::storage::KeyValueStore;
use crate::stores::Collection;
use crate::types::{NewPosition, Position, PositionPatch};

/// PositionStore manages the staff position directory
///
/// Positions carry no timestamps; they are plain lookup rows.
pub struct PositionStore {
    collection: Collection<Position>,
}

impl PositionStore {
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        Ok(Self {
            collection: Collection::load(kv)?,
        })
    }

    pub fn list(&self) -> &[Position] {
        self.collection.list()
    }

    pub fn get(&self, id: &str) -> Option<&Position> {
        self.collection.get(id)
    }

    pub fn create(&mut self, draft: NewPosition) -> Result<Position, StorageError> {
        let position = Position {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            clearance_level: draft.clearance_level,
        };
        self.collection.insert(position.clone())?;
        Ok(position)
    }

    pub fn update(&mut self, id: &str, patch: PositionPatch) -> Result<Position, DataError> {
        self.collection
            .update_with("position", id, |position| patch.apply(position))
    }

    pub fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        self.collection.remove(id)
    }
}
