use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Token lifetimes plus the hashing and signing setup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Seconds an access token stays valid
    pub access_token_lifetime: u64,
    /// Seconds a refresh token stays valid
    pub refresh_token_lifetime: u64,
    pub argon2: Argon2Config,
    pub jwt: JwtConfig,
}

/// Argon2id cost parameters for newly hashed passwords
///
/// Hashes made with other parameters still verify and are upgraded on the
/// next successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Argon2Config {
    /// KiB of memory per hash
    pub memory_cost: u32,
    /// Passes over memory
    pub time_cost: u32,
    /// Lanes
    pub parallelism: u32,
    /// Output bytes
    pub hash_length: u32,
}

/// Signing key and registered claims for issued tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// HMAC key, set through USER_API__AUTH__JWT__SECRET
    pub secret: String,
    pub algorithm: JwtAlgorithm,
    /// `iss` claim written and required
    pub issuer: String,
    /// `aud` claim written and required
    pub audience: String,
}

/// HMAC algorithms accepted for signing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JwtAlgorithm {
    #[default]
    HS256,
    HS384,
    HS512,
}

impl From<JwtAlgorithm> for jsonwebtoken::Algorithm {
    fn from(algorithm: JwtAlgorithm) -> Self {
        match algorithm {
            JwtAlgorithm::HS256 => jsonwebtoken::Algorithm::HS256,
            JwtAlgorithm::HS384 => jsonwebtoken::Algorithm::HS384,
            JwtAlgorithm::HS512 => jsonwebtoken::Algorithm::HS512,
        }
    }
}

const SERVICE_NAME: &str = "user-auth-api";

/// Longest lifetime accepted for either token, ten years in seconds
pub const MAX_TOKEN_LIFETIME: u64 = 10 * 365 * 24 * 60 * 60;

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_lifetime: 5 * 60,
            refresh_token_lifetime: 24 * 60 * 60,
            argon2: Argon2Config::default(),
            jwt: JwtConfig::default(),
        }
    }
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: 64 * 1024,
            time_cost: 3,
            parallelism: 4,
            hash_length: 32,
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            algorithm: JwtAlgorithm::default(),
            issuer: SERVICE_NAME.to_string(),
            audience: SERVICE_NAME.to_string(),
        }
    }
}

fn invalid<T: ToString>(message: T) -> ConfigError {
    ConfigError::ValidationError(message.to_string())
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.access_token_lifetime == 0 {
            return Err(invalid("auth.access_token_lifetime must be positive"));
        }
        if self.refresh_token_lifetime <= self.access_token_lifetime {
            return Err(invalid(
                "auth.refresh_token_lifetime must outlive auth.access_token_lifetime",
            ));
        }
        if self.refresh_token_lifetime > MAX_TOKEN_LIFETIME {
            return Err(invalid(format!(
                "auth.refresh_token_lifetime must not exceed {} seconds",
                MAX_TOKEN_LIFETIME
            )));
        }

        self.argon2.validate()?;
        self.jwt.validate()
    }
}

impl Validate for Argon2Config {
    fn validate(&self) -> Result<(), ConfigError> {
        let costs = [
            ("memory_cost", self.memory_cost),
            ("time_cost", self.time_cost),
            ("parallelism", self.parallelism),
            ("hash_length", self.hash_length),
        ];

        match costs.iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(invalid(format!("auth.argon2.{} must be positive", name))),
            None => Ok(()),
        }
    }
}

impl Validate for JwtConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.trim().is_empty() {
            return Err(invalid("auth.jwt.secret must be set"));
        }

        for (name, value) in [("issuer", &self.issuer), ("audience", &self.audience)] {
            if value.is_empty() {
                return Err(invalid(format!("auth.jwt.{} cannot be empty", name)));
            }
        }

        Ok(())
    }
}
