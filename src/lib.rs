//! okconv - color conversion from the command line
//!
//! Thin front end over the `okcolor` crate: value parsing, YAML
//! configuration and report formatting.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
