//! Integration tests driving the HTTP API in-process

pub mod auth_test;
