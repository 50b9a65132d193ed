use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::{DataError, StorageError};
use crate::storage::KeyValueStore;
use crate::stores::Collection;
use crate::types::{RegistrationRequest, RegistrationStatus};

/// RegistrationStore manages pending account requests
pub struct RegistrationStore {
    collection: Collection<RegistrationRequest>,
}

impl RegistrationStore {
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        Ok(Self {
            collection: Collection::load(kv)?,
        })
    }

    pub fn list(&self) -> &[RegistrationRequest] {
        self.collection.list()
    }

    pub fn get(&self, id: &str) -> Option<&RegistrationRequest> {
        self.collection.get(id)
    }

    /// Whether an undecided request already exists for `email`.
    pub fn has_pending_for(&self, email: &str) -> bool {
        self.collection
            .list()
            .iter()
            .any(|r| r.email == email && r.status == RegistrationStatus::Pending)
    }

    /// File a new PENDING request. The password arrives already hashed.
    pub fn create_pending(
        &mut self,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> Result<RegistrationRequest, StorageError> {
        let request = RegistrationRequest {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            status: RegistrationStatus::Pending,
            created_at: Utc::now(),
        };
        self.collection.insert(request.clone())?;
        Ok(request)
    }

    /// Move a request to a decided status.
    pub fn set_status(
        &mut self,
        id: &str,
        status: RegistrationStatus,
    ) -> Result<RegistrationRequest, DataError> {
        self.collection
            .update_with("registration request", id, |request| {
                request.status = status;
            })
    }
}
