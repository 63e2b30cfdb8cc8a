//! Configuration loading through `config::load`
//!
//! Every test touches process-wide environment variables, so they all run
//! under `#[serial]`.

use serial_test::serial;
use std::env;
use user_auth_api::config::*;

const SECRET_VAR: &str = "USER_API__AUTH__JWT__SECRET";

mod utils {
    /// Remove every USER_API variable plus APP_ENV
    pub fn clean_env_vars() {
        let keys: Vec<String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("USER_API"))
            .map(|(k, _)| k)
            .collect();

        for key in keys {
            unsafe { std::env::remove_var(&key) };
        }
        unsafe { std::env::remove_var("APP_ENV") };
    }
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
#[serial]
fn test_load_fails_without_jwt_secret() {
    utils::clean_env_vars();

    let result = load();

    match result {
        Err(ConfigError::ValidationError(message)) => {
            assert!(message.contains("secret"), "Unexpected message: {}", message)
        }
        other => panic!("Expected a validation error, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_load_defaults_with_secret() {
    utils::clean_env_vars();
    unsafe { env::set_var(SECRET_VAR, "unit-test-secret") };

    let config = load();
    utils::clean_env_vars();

    let config = config.expect("Configuration with a secret should load");
    assert_eq!(config.app.name, "user-auth-api");
    assert_eq!(config.app.environment, "development");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.auth.access_token_lifetime, 300);
    assert_eq!(config.auth.refresh_token_lifetime, 86400);
    assert_eq!(config.auth.jwt.secret, "unit-test-secret");
    assert_eq!(config.auth.jwt.algorithm, JwtAlgorithm::HS256);
    assert!(config.api.swagger_enabled);
    assert_eq!(config.api.swagger_path, "/docs");
}

// =============================================================================
// Environment overrides
// =============================================================================

#[test]
#[serial]
fn test_env_overrides_server_port() {
    utils::clean_env_vars();
    unsafe {
        env::set_var(SECRET_VAR, "unit-test-secret");
        env::set_var("USER_API__SERVER__PORT", "9090");
    };

    let config = load();
    utils::clean_env_vars();

    assert_eq!(config.unwrap().server.port, 9090);
}

#[test]
#[serial]
fn test_env_overrides_token_lifetimes() {
    utils::clean_env_vars();
    unsafe {
        env::set_var(SECRET_VAR, "unit-test-secret");
        env::set_var("USER_API__AUTH__ACCESS_TOKEN_LIFETIME", "60");
        env::set_var("USER_API__AUTH__REFRESH_TOKEN_LIFETIME", "3600");
    };

    let config = load();
    utils::clean_env_vars();

    let config = config.unwrap();
    assert_eq!(config.auth.access_token_lifetime, 60);
    assert_eq!(config.auth.refresh_token_lifetime, 3600);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
#[serial]
fn test_refresh_lifetime_must_exceed_access_lifetime() {
    utils::clean_env_vars();
    unsafe {
        env::set_var(SECRET_VAR, "unit-test-secret");
        env::set_var("USER_API__AUTH__ACCESS_TOKEN_LIFETIME", "600");
        env::set_var("USER_API__AUTH__REFRESH_TOKEN_LIFETIME", "600");
    };

    let config = load();
    utils::clean_env_vars();

    assert!(matches!(config, Err(ConfigError::ValidationError(_))));
}

#[test]
#[serial]
fn test_zero_port_is_rejected() {
    utils::clean_env_vars();
    unsafe {
        env::set_var(SECRET_VAR, "unit-test-secret");
        env::set_var("USER_API__SERVER__PORT", "0");
    };

    let config = load();
    utils::clean_env_vars();

    assert!(config.is_err());
}

#[test]
#[serial]
fn test_unparsable_port_is_a_load_error() {
    utils::clean_env_vars();
    unsafe {
        env::set_var(SECRET_VAR, "unit-test-secret");
        env::set_var("USER_API__SERVER__PORT", "not-a-port");
    };

    let config = load();
    utils::clean_env_vars();

    assert!(matches!(config, Err(ConfigError::Load(_))));
}

#[test]
fn test_jwt_algorithm_maps_to_jsonwebtoken() {
    assert_eq!(jsonwebtoken::Algorithm::from(JwtAlgorithm::HS256), jsonwebtoken::Algorithm::HS256);
    assert_eq!(jsonwebtoken::Algorithm::from(JwtAlgorithm::HS512), jsonwebtoken::Algorithm::HS512);
}
