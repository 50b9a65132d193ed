mod crypto_provider;
mod password_validator;

pub use crypto_provider::CryptoProvider;
pub use password_validator::PasswordValidator;
