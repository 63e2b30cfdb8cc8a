//! Unit tests that need the public crate API but no HTTP service

pub mod config_test;
