//! Fixtures shared by unit and integration tests

pub mod factories;
pub mod instance;
pub mod setup;

pub use factories::{DEFAULT_PASSWORD, UserFactory};
