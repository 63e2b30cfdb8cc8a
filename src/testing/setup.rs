use sea_orm::DatabaseConnection;

use crate::config::{Argon2Config, AuthConfig, JwtConfig};
use crate::database;
use crate::security::{JwtService, PasswordHasher};

pub const TEST_SECRET: &str = "test-secret-not-for-production";

/// Returns an in-memory SQLite database with all migrations applied
///
/// Every call creates a fresh database, so tests never see each other's users.
///
/// # Panics
/// Panics if the connection or a migration fails. Tests should fail fast
/// when setup is broken.
pub async fn database() -> DatabaseConnection {
    database::memory()
        .await
        .expect("Failed to create in-memory database")
}

/// Auth configuration with a fixed secret and cheap Argon2 parameters
///
/// - memory_cost: 8192 KB instead of 64 MB
/// - time_cost: 1 iteration instead of 3
/// - parallelism: 1 lane instead of 4
pub fn auth_config() -> AuthConfig {
    AuthConfig {
        argon2: Argon2Config {
            memory_cost: 8192,
            time_cost: 1,
            parallelism: 1,
            hash_length: 32,
        },
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            ..JwtConfig::default()
        },
        ..AuthConfig::default()
    }
}

pub fn password_hasher() -> PasswordHasher {
    PasswordHasher::from_config(&auth_config().argon2).expect("Failed to create password hasher")
}

pub fn jwt() -> JwtService {
    JwtService::from_config(&auth_config())
}
