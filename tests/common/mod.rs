//! Common test infrastructure for okconv integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::TestConfig;

use std::process::{Command, Output};

/// Run the okconv binary with `args`, isolated from the caller's environment
pub fn run_okconv(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_okconv"))
        .args(args)
        .env_remove(okconv::models::config::CONFIG_ENV)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run okconv")
}
