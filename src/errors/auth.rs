use thiserror::Error;

/// Authentication and registration errors
///
/// Unknown email and wrong password both surface as `InvalidCredentials` at
/// this boundary; the distinction only exists in logs.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is awaiting moderator approval")]
    AccountNotApproved,

    #[error("Email already in use: {0}")]
    DuplicateEmail(String),

    #[error("Password validation failed: {0}")]
    WeakPassword(String),

    #[error("Password hashing failed: {0}")]
    PasswordHashingFailed(String),
}
