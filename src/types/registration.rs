use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::keys;
use crate::types::Record;

/// Lifecycle of a pending account request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
}

/// Account-creation request awaiting moderator review
///
/// The password is hashed the moment the request is filed; approval carries
/// the hash onto the new account. Plaintext is never at rest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub id: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
}

impl Record for RegistrationRequest {
    const STORE_KEY: &'static str = keys::REGISTRATION_REQUESTS;

    fn id(&self) -> &str {
        &self.id
    }
}
