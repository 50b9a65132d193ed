use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::{AuthError, DataError, StorageError};
use crate::storage::KeyValueStore;
use crate::stores::Collection;
use crate::types::{NewUser, User, UserPatch, UserRecord};

/// UserStore manages portal accounts in the users collection
///
/// Emails are unique across the collection. Credential hashes never leave
/// this store except through [`UserStore::record_by_email`], which exists for
/// the authentication path; everything else hands out sanitized [`User`]
/// views.
pub struct UserStore {
    collection: Collection<UserRecord>,
}

impl UserStore {
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        Ok(Self {
            collection: Collection::load(kv)?,
        })
    }

    /// Number of registered accounts.
    pub fn count(&self) -> usize {
        self.collection.list().len()
    }

    /// Sanitized views of every account, stored order.
    pub fn list(&self) -> Vec<User> {
        self.collection.list().iter().map(User::from).collect()
    }

    pub fn get(&self, id: &str) -> Option<User> {
        self.collection.get(id).map(User::from)
    }

    /// Full stored record for the authentication path.
    pub(crate) fn record_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.collection.list().iter().find(|u| u.email == email)
    }

    pub fn email_taken(&self, email: &str) -> bool {
        self.record_by_email(email).is_some()
    }

    /// Create an account with a fresh id
    ///
    /// # Errors
    /// `AuthError::DuplicateEmail` when the email is already held by another
    /// account.
    pub fn create(&mut self, new: NewUser) -> Result<User, DataError> {
        if self.email_taken(&new.email) {
            return Err(AuthError::DuplicateEmail(new.email).into());
        }
        let record = UserRecord {
            id: Uuid::new_v4().to_string(),
            email: new.email,
            username: new.username,
            password_hash: new.password_hash,
            role: new.role,
            clearance_level: new.clearance_level,
            created_at: Utc::now(),
            is_approved: Some(new.is_approved),
            profile_id: None,
        };
        let user = User::from(&record);
        self.collection.insert(record)?;
        Ok(user)
    }

    /// Apply a patch; untouched fields are preserved.
    pub fn update(&mut self, id: &str, patch: UserPatch) -> Result<User, DataError> {
        let updated = self
            .collection
            .update_with("user", id, |record| patch.apply(record))?;
        Ok(User::from(&updated))
    }

    /// Idempotent delete.
    pub fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        self.collection.remove(id)
    }
}
