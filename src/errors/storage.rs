use thiserror::Error;

/// Errors raised at the key-value storage boundary
///
/// Always fatal to the calling operation. There is no retry anywhere: a
/// failed write leaves the persisted collection as it was before the attempt.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying read/write/remove failed
    #[error("Storage error: {operation} on key '{key}' failed: {source}")]
    Io {
        operation: &'static str,
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a collection before writing it
    #[error("Serialization error for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to deserialize a stored document
    #[error("Deserialization error for key '{key}': {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Create an I/O error with context
    pub fn io(operation: &'static str, key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            key: key.into(),
            source,
        }
    }
}
