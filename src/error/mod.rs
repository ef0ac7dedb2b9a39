pub mod config_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use error_code::{ErrorCode, Stage};

pub type Result<T> = std::result::Result<T, ConfigError>;
