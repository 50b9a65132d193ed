use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::keys;
use crate::types::Record;

/// Badge granted to every freshly approved account.
pub const NEWCOMER_BADGE: &str = "Новичок";

/// Staff profile, one-to-one with an account
///
/// Created on first profile edit or on registration approval; edited by the
/// owning account only (enforced by the UI, advisory here).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub user_id: String,
    pub full_name: String,
    pub bio: String,
    /// Copy of a position name, not a foreign key.
    pub position: String,
    pub department: String,
    pub contact_info: String,
    pub join_date: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub contributions: u32,
    pub badges: Vec<String>,
}

impl Record for UserProfile {
    const STORE_KEY: &'static str = keys::USER_PROFILES;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Draft for a new profile
///
/// The store assigns id, join/last-active dates, a zero contribution counter
/// and the newcomer badge.
#[derive(Clone, Debug)]
pub struct NewUserProfile {
    pub user_id: String,
    pub full_name: String,
    pub bio: String,
    pub position: String,
    pub department: String,
    pub contact_info: String,
}

impl NewUserProfile {
    /// Empty draft for an account that has not filled anything in yet,
    /// as created by registration approval.
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            full_name: String::new(),
            bio: String::new(),
            position: String::new(),
            department: String::new(),
            contact_info: String::new(),
        }
    }
}

/// Editable profile fields; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default)]
pub struct UserProfilePatch {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub contact_info: Option<String>,
    pub contributions: Option<u32>,
    pub badges: Option<Vec<String>>,
}

impl UserProfilePatch {
    pub(crate) fn apply(self, profile: &mut UserProfile) {
        if let Some(full_name) = self.full_name {
            profile.full_name = full_name;
        }
        if let Some(bio) = self.bio {
            profile.bio = bio;
        }
        if let Some(position) = self.position {
            profile.position = position;
        }
        if let Some(department) = self.department {
            profile.department = department;
        }
        if let Some(contact_info) = self.contact_info {
            profile.contact_info = contact_info;
        }
        if let Some(contributions) = self.contributions {
            profile.contributions = contributions;
        }
        if let Some(badges) = self.badges {
            profile.badges = badges;
        }
    }
}
