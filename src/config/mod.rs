pub mod app;
pub mod auth;

use thiserror::Error;

pub use app::{ApiConfig, AppConfig, AppMetadata, DatabaseConfig, ObservabilityConfig, ServerConfig};
pub use auth::{Argon2Config, AuthConfig, JwtAlgorithm, JwtConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Checks invariants serde defaults cannot express.
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
