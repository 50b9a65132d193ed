use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::KeyValueStore;
use crate::errors::StorageError;

/// File-backed key-value store
///
/// One JSON document per key under the data directory (`<dir>/<key>.json`),
/// the durable equivalent of the origin storage the portal originally
/// persisted to. A missing file reads as `None`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store, creating the data directory if needed
    ///
    /// # Errors
    /// `StorageError::Io` when the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| StorageError::io("create_dir", dir.display().to_string(), e))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io("read", key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value).map_err(|e| StorageError::io("write", key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io("remove", key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_the_data_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("portal-data");
        let _store = FileStore::open(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn documents_survive_reopening_the_store() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let store = FileStore::open(tmp.path()).unwrap();
            store.set("sce_positions", r#"[{"id":"1"}]"#).unwrap();
        }
        let store = FileStore::open(tmp.path()).unwrap();
        assert_eq!(
            store.get("sce_positions").unwrap().as_deref(),
            Some(r#"[{"id":"1"}]"#)
        );
    }

    #[test]
    fn missing_file_reads_as_none_and_remove_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        assert_eq!(store.get("sce_reports").unwrap(), None);
        store.remove("sce_reports").unwrap();
        store.set("sce_reports", "[]").unwrap();
        store.remove("sce_reports").unwrap();
        store.remove("sce_reports").unwrap();
        assert_eq!(store.get("sce_reports").unwrap(), None);
    }
}
