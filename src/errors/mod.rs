use thiserror::Error;

use crate::types::registration::RegistrationStatus;

pub mod auth;
pub mod storage;

pub use auth::AuthError;
pub use storage::StorageError;

/// Umbrella error for repository and facade operations
///
/// Hybrid design: infrastructure errors (storage) are shared by every store,
/// domain errors (auth) stay in their own enum and nest transparently.
/// Callers display the error kind as a localized message; no operation is
/// expected to take the whole application down.
#[derive(Error, Debug)]
pub enum DataError {
    /// Entity id absent on update or fetch-by-id
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Approval attempted on a request that already left the PENDING state
    #[error("registration request {id} is not pending (status: {status:?})")]
    RegistrationNotPending {
        id: String,
        status: RegistrationStatus,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl DataError {
    /// Create a not-found error with context
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}
