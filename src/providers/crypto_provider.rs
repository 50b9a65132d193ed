use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::errors::AuthError;

/// Cryptographic operations provider
///
/// Argon2id password hashing with per-password random salts. Verification
/// goes through the `argon2` verifier, which compares in constant time.
pub struct CryptoProvider;

impl CryptoProvider {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a fresh salt
    ///
    /// # Errors
    /// `AuthError::PasswordHashingFailed` when the hasher rejects its input.
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswordHashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored hash
    ///
    /// A malformed stored hash verifies as `false`; to the caller it is
    /// indistinguishable from a wrong password.
    pub fn verify_password(&self, hash: &str, password: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

impl Default for CryptoProvider {
    fn default() -> Self {
        Self::new()
    }
}
