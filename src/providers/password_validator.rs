use crate::errors::AuthError;

/// Password policy applied at registration
///
/// Only a minimum-length rule for now; the limit comes from configuration.
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// # Errors
    /// `AuthError::WeakPassword` naming the failed rule.
    pub fn validate(&self, password: &str) -> Result<(), AuthError> {
        if password.chars().count() < self.min_length {
            return Err(AuthError::WeakPassword(format!(
                "password must be at least {} characters",
                self.min_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_password_at_the_limit() {
        let validator = PasswordValidator::new(8);
        assert!(validator.validate("12345678").is_ok());
    }

    #[test]
    fn rejects_a_short_password() {
        let validator = PasswordValidator::new(8);
        let err = validator.validate("1234567").unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword(_)));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let validator = PasswordValidator::new(8);
        // 8 cyrillic characters, 16 bytes
        assert!(validator.validate("парольно").is_ok());
    }
}
