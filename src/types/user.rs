use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::keys;
use crate::types::Record;

/// Portal roles, from administrator down to reader
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Moderator,
    Researcher,
    Agent,
    Reader,
}

/// Stored account record, including the credential hash
///
/// Never handed to presentation code; see [`User`] for the sanitized view.
/// Exactly one record may hold each email.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    /// Nominal access tier, 1-5. Advisory only; not a real permission gate.
    pub clearance_level: u8,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
    /// Back-reference to this account's profile, set when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
}

impl Record for UserRecord {
    const STORE_KEY: &'static str = keys::USERS;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Public view of an account with the credential hash stripped
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    pub clearance_level: u8,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
}

impl From<&UserRecord> for User {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            email: record.email.clone(),
            username: record.username.clone(),
            role: record.role,
            clearance_level: record.clearance_level,
            created_at: record.created_at,
            is_approved: record.is_approved,
            profile_id: record.profile_id.clone(),
        }
    }
}

/// Draft for a new account; the store assigns id and creation time.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    pub clearance_level: u8,
    pub is_approved: bool,
}

/// Admin-editable account fields; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub role: Option<UserRole>,
    pub clearance_level: Option<u8>,
    pub is_approved: Option<bool>,
    pub profile_id: Option<String>,
}

impl UserPatch {
    pub(crate) fn apply(self, record: &mut UserRecord) {
        if let Some(username) = self.username {
            record.username = username;
        }
        if let Some(role) = self.role {
            record.role = role;
        }
        if let Some(clearance_level) = self.clearance_level {
            record.clearance_level = clearance_level;
        }
        if let Some(is_approved) = self.is_approved {
            record.is_approved = Some(is_approved);
        }
        if let Some(profile_id) = self.profile_id {
            record.profile_id = Some(profile_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> UserRecord {
        UserRecord {
            id: "u-1".to_string(),
            email: "agent@sce-foundation.net".to_string(),
            username: "agent".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: UserRole::Agent,
            clearance_level: 2,
            created_at: Utc::now(),
            is_approved: Some(true),
            profile_id: None,
        }
    }

    #[test]
    fn sanitized_view_never_serializes_the_hash() {
        let user = User::from(&sample_record());
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("passwordHash"));
        assert!(json.contains("\"email\":\"agent@sce-foundation.net\""));
    }

    #[test]
    fn patch_leaves_unset_fields_alone() {
        let mut record = sample_record();
        UserPatch {
            role: Some(UserRole::Moderator),
            clearance_level: Some(4),
            ..UserPatch::default()
        }
        .apply(&mut record);
        assert_eq!(record.role, UserRole::Moderator);
        assert_eq!(record.clearance_level, 4);
        assert_eq!(record.username, "agent");
        assert_eq!(record.is_approved, Some(true));
    }

    #[test]
    fn roles_serialize_in_stored_wire_form() {
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).unwrap(),
            "\"ADMIN\""
        );
        assert_eq!(
            serde_json::from_str::<UserRole>("\"READER\"").unwrap(),
            UserRole::Reader
        );
    }
}
