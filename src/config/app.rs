use serde::{Deserialize, Serialize};

use super::{AuthConfig, ConfigError, Validate};

/// Everything the binary reads at startup
///
/// Every section falls back to its `Default`, so a partial file or a single
/// environment variable is enough to override one value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppMetadata,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub observability: ObservabilityConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    pub name: String,
    /// development, staging or production
    pub environment: String,
}

/// HTTP listener
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker threads, 0 lets actix pick one per core
    pub workers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sea-orm connection URL, `sqlite://...` or `postgres://...`
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive, overridden by RUST_LOG
    pub log_level: String,
    /// Emit JSON lines instead of the human-readable format
    pub json: bool,
}

/// Interactive documentation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub swagger_enabled: bool,
    pub swagger_path: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "user-auth-api".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            workers: 0,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://db.sqlite3?mode=rwc".to_string(),
            max_connections: 10,
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            swagger_enabled: true,
            swagger_path: "/docs".to_string(),
        }
    }
}

fn required(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::ValidationError(format!("{} cannot be empty", key)));
    }

    Ok(())
}

impl Validate for AppMetadata {
    fn validate(&self) -> Result<(), ConfigError> {
        required("app.name", &self.name)?;
        required("app.environment", &self.environment)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        required("server.host", &self.host)?;

        if self.port == 0 {
            return Err(ConfigError::ValidationError("server.port must be positive".to_string()));
        }

        Ok(())
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        required("database.url", &self.url)?;

        if self.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "database.max_connections must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Validate for ObservabilityConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        required("observability.log_level", &self.log_level)
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.swagger_enabled {
            return Ok(());
        }

        if !self.swagger_path.starts_with('/') || self.swagger_path.len() < 2 {
            return Err(ConfigError::ValidationError(format!(
                "api.swagger_path must be an absolute path other than /, got {:?}",
                self.swagger_path
            )));
        }

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.app.validate()?;
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.observability.validate()?;
        self.api.validate()
    }
}

/// Prefix of environment overrides, `USER_API__SERVER__PORT=8080` sets `server.port`
pub const ENV_PREFIX: &str = "USER_API";

/// Read and validate the configuration
///
/// Later sources override earlier ones:
/// `config/default` < `config/{APP_ENV}` < `config/local` < `USER_API__*`.
/// Every file is optional and may be TOML, YAML or JSON.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use config::{Config, Environment, File};

    let profile = std::env::var("APP_ENV")
        .unwrap_or_else(|_| AppMetadata::default().environment);
    let files = [
        "config/default".to_string(),
        format!("config/{}", profile),
        "config/local".to_string(),
    ];

    let loaded: AppConfig = files
        .iter()
        .fold(Config::builder(), |builder, name| {
            builder.add_source(File::with_name(name).required(false))
        })
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize()?;

    loaded.validate()?;

    Ok(loaded)
}
