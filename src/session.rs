use std::sync::Arc;

use crate::errors::StorageError;
use crate::storage::{keys, KeyValueStore};
use crate::types::{User, UserRole};

/// Session/identity manager
///
/// Two states: anonymous and authenticated. The authenticated identity is a
/// sanitized [`User`] snapshot persisted under its own key so a restarted
/// process resumes the session.
pub struct SessionManager {
    kv: Arc<dyn KeyValueStore>,
    current: Option<User>,
}

impl SessionManager {
    /// Restore the persisted identity, if any
    ///
    /// The snapshot is loaded as-is, without re-validation against the users
    /// collection: an account deleted or edited since the snapshot was taken
    /// stays visible until logout. A snapshot that fails to parse is
    /// discarded and its key removed.
    pub fn restore(kv: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        let current = match kv.get(keys::SESSION)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    tracing::debug!(user_id = %user.id, "restored session identity");
                    Some(user)
                }
                Err(error) => {
                    tracing::warn!(%error, "discarding malformed session snapshot");
                    kv.remove(keys::SESSION)?;
                    None
                }
            },
            None => None,
        };
        Ok(Self { kv, current })
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.current.as_ref(), Some(user) if user.role == UserRole::Admin)
    }

    /// Set and persist the authenticated identity.
    pub fn set_identity(&mut self, user: User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&user).map_err(|e| StorageError::Serialize {
            key: keys::SESSION.to_string(),
            source: e,
        })?;
        self.kv.set(keys::SESSION, &raw)?;
        self.current = Some(user);
        Ok(())
    }

    /// Unconditionally drop the identity and its persisted snapshot.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.current = None;
        self.kv.remove(keys::SESSION)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::storage::MemoryStore;

    fn reader(id: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{id}@sce-foundation.net"),
            username: id.to_string(),
            role: UserRole::Reader,
            clearance_level: 1,
            created_at: Utc::now(),
            is_approved: Some(true),
            profile_id: None,
        }
    }

    #[test]
    fn identity_survives_a_restart() {
        let kv = Arc::new(MemoryStore::new());
        let mut session = SessionManager::restore(kv.clone()).unwrap();
        session.set_identity(reader("u-1")).unwrap();

        let restored = SessionManager::restore(kv).unwrap();
        assert_eq!(restored.current().map(|u| u.id.as_str()), Some("u-1"));
        assert!(restored.is_authenticated());
    }

    #[test]
    fn malformed_snapshot_is_discarded() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(keys::SESSION, "{broken").unwrap();

        let session = SessionManager::restore(kv.clone()).unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(kv.get(keys::SESSION).unwrap(), None);
    }

    #[test]
    fn clear_works_from_any_state() {
        let kv = Arc::new(MemoryStore::new());
        let mut session = SessionManager::restore(kv).unwrap();
        session.clear().unwrap();
        session.set_identity(reader("u-2")).unwrap();
        session.clear().unwrap();
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }
}
