//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::process::Output;

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Assert the command succeeded
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Expected success, got {}. Stderr: {}",
        output.status,
        stderr(output)
    );
}

/// Assert the command failed and its stderr mentions `message`
pub fn assert_failure(output: &Output, message: &str) {
    assert!(
        !output.status.success(),
        "Expected failure, got success. Stdout: {}",
        stdout(output)
    );
    let err = stderr(output);
    assert!(
        err.contains(message),
        "Expected stderr to contain {message:?}, got: {err}"
    );
}

/// Assert the command succeeded and printed exactly `expected` on one line
pub fn assert_prints(output: &Output, expected: &str) {
    assert_success(output);
    assert_eq!(stdout(output).trim_end(), expected);
}

/// Parse stdout as JSON
pub fn json(output: &Output) -> serde_json::Value {
    assert_success(output);
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!("Expected JSON output ({e}), got: {}", stdout(output))
    })
}
