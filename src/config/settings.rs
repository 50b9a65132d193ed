use std::env;
use std::path::PathBuf;

const DEFAULT_SUPER_ADMIN_EMAIL: &str = "overseer@sce-foundation.net";
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Portal configuration
///
/// The super-admin email is the designated address that registers straight
/// into an administrator account even when other accounts already exist.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub super_admin_email: String,
    pub min_password_length: usize,
    /// Directory for the file-backed store; `None` means in-memory only.
    pub data_dir: Option<PathBuf>,
}

impl PortalConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let super_admin_email = env::var("SCE_SUPER_ADMIN_EMAIL")
            .unwrap_or_else(|_| DEFAULT_SUPER_ADMIN_EMAIL.to_string());

        let min_password_length = env::var("SCE_MIN_PASSWORD_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MIN_PASSWORD_LENGTH);

        let data_dir = env::var("SCE_DATA_DIR").ok().map(PathBuf::from);

        Self {
            super_admin_email,
            min_password_length,
            data_dir,
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            super_admin_email: DEFAULT_SUPER_ADMIN_EMAIL.to_string(),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            data_dir: None,
        }
    }
}
