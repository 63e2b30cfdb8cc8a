//! Attack-oriented tests against the HTTP API

pub mod injection_test;
