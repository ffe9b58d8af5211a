//! End-to-end tests for the okconv binary.

mod common;

use common::{assert_failure, assert_prints, assert_success, run_okconv, stdout, TestConfig};
use pretty_assertions::assert_eq;

#[test]
fn test_convert_hex_to_hsv_decimal() {
    let output = run_okconv(&["convert", "#ff8800", "--to", "hsv-decimal"]);
    assert_prints(&output, "rgb888(255, 136, 0) -> hsv-decimal(32, 100, 100)");
}

#[test]
fn test_convert_packed_rgb565() {
    let output = run_okconv(&["convert", "0xf800", "--to", "rgb888"]);
    assert_prints(&output, "rgb565(31, 0, 0) -> rgb888(255, 0, 0)");
}

#[test]
fn test_convert_channels_to_linear() {
    let output = run_okconv(&[
        "convert",
        "128,128,128",
        "--from",
        "rgb888",
        "--to",
        "linear-rgb16",
    ]);
    assert_prints(
        &output,
        "rgb888(128, 128, 128) -> linear-rgb16(14146, 14146, 14146)",
    );
}

#[test]
fn test_convert_json_output() {
    let output = run_okconv(&[
        "convert", "0,0,255", "-f", "rgb888", "-t", "hsv888", "--format", "json",
    ]);
    let json = common::json(&output);

    assert_eq!(json["input"]["hex"], "#0000ff");
    assert_eq!(json["output"]["space"], "hsv888");
    assert_eq!(json["output"]["channels"], serde_json::json!([171, 255, 255]));
}

#[test]
fn test_out_of_range_channel_fails() {
    let output = run_okconv(&["convert", "256,0,0", "--from", "rgb888", "--to", "hsv888"]);
    assert_failure(&output, "Channel r = 256 is out of range for rgb888 (max 255)");
}

#[test]
fn test_unknown_space_fails() {
    let output = run_okconv(&["convert", "#fff", "--to", "cmyk"]);
    assert_failure(&output, "unknown color space 'cmyk'");
}

#[test]
fn test_missing_source_fails() {
    let output = run_okconv(&["convert", "1,2,3", "--to", "rgb888"]);
    assert_failure(&output, "No source color space");
}

#[test]
fn test_unknown_swatch_fails() {
    let output = run_okconv(&["convert", "nope", "--to", "rgb888"]);
    assert_failure(&output, "Unknown swatch 'nope'");
}

#[test]
fn test_config_defaults_and_swatches() {
    let config = TestConfig::sample();

    let output = run_okconv(&["--config", config.path_str(), "convert", "brand"]);
    assert_prints(&output, "rgb888(255, 136, 0) -> hsv-decimal(32, 100, 100)");

    let output = run_okconv(&["convert", "255,255,255", "--config", config.path_str()]);
    assert_prints(&output, "rgb888(255, 255, 255) -> hsv-decimal(0, 0, 100)");

    let output = run_okconv(&[
        "convert",
        "panel-green",
        "--to",
        "rgb888",
        "--config",
        config.path_str(),
    ]);
    assert_prints(&output, "rgb565(0, 63, 0) -> rgb888(0, 255, 0)");
}

#[test]
fn test_config_from_environment() {
    let config = TestConfig::sample();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_okconv"))
        .args(["convert", "brand", "--to", "rgb565"])
        .env(okconv::models::config::CONFIG_ENV, config.path())
        .output()
        .unwrap();
    assert_prints(&output, "rgb888(255, 136, 0) -> rgb565(31, 34, 0)");
}

#[test]
fn test_invalid_config_fails() {
    let config = TestConfig::new("default_to: [1, 2]\n");
    let output = run_okconv(&["--config", config.path_str(), "convert", "#000"]);
    assert_failure(&output, "Invalid config");
}

#[test]
fn test_spaces_lists_all() {
    let output = run_okconv(&["spaces"]);
    assert_success(&output);

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 9);
    assert!(text.contains("hsv48"));
    assert!(text.contains("linear-rgb888"));
}

#[test]
fn test_status_without_subcommand() {
    let output = run_okconv(&[]);
    assert_success(&output);

    let text = stdout(&output);
    assert!(text.starts_with(&format!("okconv v{}", env!("CARGO_PKG_VERSION"))));
    assert!(text.contains("Swatches:     0"));

    let config = TestConfig::sample();
    let output = run_okconv(&["--config", config.path_str()]);
    assert!(stdout(&output).contains("Swatches:     3"));
}
