mod file;
mod memory;

use std::sync::Arc;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::config::PortalConfig;
use crate::errors::StorageError;

/// Reserved store keys: one per collection plus the session snapshot.
///
/// The exact strings match the document layout the portal has always
/// persisted, so existing data remains readable.
pub mod keys {
    pub const USERS: &str = "sce_users";
    pub const SESSION: &str = "sce_user";
    pub const OBJECTS: &str = "sce_objects";
    pub const NEWS: &str = "sce_news";
    pub const REPORTS: &str = "sce_reports";
    pub const REGISTRATION_REQUESTS: &str = "sce_registration_requests";
    pub const POSITIONS: &str = "sce_positions";
    pub const USER_PROFILES: &str = "sce_user_profiles";
}

/// Synchronous key-value storage boundary
///
/// One serialized document per key. Absence of a key is an empty collection,
/// not an error. The store has exactly one logical writer; there is no
/// concurrency control at this layer.
pub trait KeyValueStore: Send + Sync {
    /// Read the document stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous document.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the document under `key`; removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Open the store selected by configuration: file-backed when a data
/// directory is set, in-memory otherwise.
pub fn open_store(config: &PortalConfig) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    let kv: Arc<dyn KeyValueStore> = match &config.data_dir {
        Some(dir) => Arc::new(FileStore::open(dir)?),
        None => Arc::new(MemoryStore::new()),
    };
    Ok(kv)
}
