pub mod api;
pub mod config;
pub mod controllers;
pub mod database;
pub mod entities;
pub mod error;
pub mod middlewares;
pub mod models;
pub mod requests;
pub mod responses;
pub mod router;
pub mod security;
pub mod services;
pub mod telemetry;

// Testing utilities (always available for integration tests)
pub mod testing;

pub use error::{Error, Validation};
pub use middlewares::v1::auth::Auth;
pub use security::{JwtService, PasswordHasher};
