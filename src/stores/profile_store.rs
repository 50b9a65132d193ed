use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::{DataError, StorageError};
use crate::storage::KeyValueStore;
use crate::stores::Collection;
use crate::types::{NewUserProfile, UserProfile, UserProfilePatch, NEWCOMER_BADGE};

/// ProfileStore manages staff profiles, one per account
pub struct ProfileStore {
    collection: Collection<UserProfile>,
}

impl ProfileStore {
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        Ok(Self {
            collection: Collection::load(kv)?,
        })
    }

    pub fn list(&self) -> &[UserProfile] {
        self.collection.list()
    }

    pub fn get(&self, id: &str) -> Option<&UserProfile> {
        self.collection.get(id)
    }

    /// Profile owned by `user_id`, if one exists.
    pub fn find_by_user(&self, user_id: &str) -> Option<&UserProfile> {
        self.collection.list().iter().find(|p| p.user_id == user_id)
    }

    /// Create a profile with a fresh id, the newcomer badge, a zero
    /// contribution counter and join/last-active dates set to now.
    pub fn create(&mut self, draft: NewUserProfile) -> Result<UserProfile, StorageError> {
        let now = Utc::now();
        let profile = UserProfile {
            id: Uuid::new_v4().to_string(),
            user_id: draft.user_id,
            full_name: draft.full_name,
            bio: draft.bio,
            position: draft.position,
            department: draft.department,
            contact_info: draft.contact_info,
            join_date: now,
            last_active: now,
            contributions: 0,
            badges: vec![NEWCOMER_BADGE.to_string()],
        };
        self.collection.insert(profile.clone())?;
        Ok(profile)
    }

    /// Shallow-merge a patch and refresh `last_active`.
    pub fn update(&mut self, id: &str, patch: UserProfilePatch) -> Result<UserProfile, DataError> {
        self.collection.update_with("user profile", id, |profile| {
            patch.apply(profile);
            profile.last_active = Utc::now();
        })
    }

    /// Idempotent delete by profile id.
    pub fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        self.collection.remove(id)
    }

    /// Cascade helper: drop the profile owned by `user_id`, if any.
    pub fn delete_by_user(&mut self, user_id: &str) -> Result<(), StorageError> {
        let id = self.find_by_user(user_id).map(|p| p.id.clone());
        if let Some(id) = id {
            self.collection.remove(&id)?;
        }
        Ok(())
    }
}
