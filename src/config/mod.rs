mod logging;
mod settings;

pub use logging::{init_logging, LoggingConfig, LoggingError};
pub use settings::PortalConfig;
