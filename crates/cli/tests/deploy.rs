//! End-to-end tests for the sitepush binary
//!
//! These tests spawn the real binary in a temporary working directory to
//! cover the config scaffolding and validation flows. No S3 server is
//! needed; every covered path stops before the first upload.

use std::process::{Command, Output};
use tempfile::TempDir;

fn run_sitepush(args: &[&str], workdir: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sitepush"))
        .args(args)
        .current_dir(workdir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run sitepush")
}

#[test]
fn first_run_scaffolds_config_and_exits_config_created() {
    let dir = TempDir::new().unwrap();

    let output = run_sitepush(&["--to", "staging"], dir.path());
    assert_eq!(output.status.code(), Some(3));

    let config_path = dir.path().join(".staging.s3.json");
    assert!(config_path.exists());

    let content = std::fs::read_to_string(&config_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["from"], "_site");
    assert_eq!(parsed["access"], "");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(".staging.s3.json"));
}

#[test]
fn unfilled_config_reports_missing_access_key_and_exits_clean() {
    let dir = TempDir::new().unwrap();

    // First run writes the scaffold
    run_sitepush(&["--to", "staging"], dir.path());
    // Second run parses it and stops at validation
    let output = run_sitepush(&["--to", "staging"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing access key"));
}

#[test]
fn validation_reports_the_first_gap_only() {
    let dir = TempDir::new().unwrap();
    let config = serde_json::json!({
        "access": "AKIA",
        "secret": "shh"
    });
    std::fs::write(
        dir.path().join(".prod.s3.json"),
        serde_json::to_string_pretty(&config).unwrap(),
    )
    .unwrap();

    let output = run_sitepush(&["--to", "prod"], dir.path());
    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing bucket name"));
    assert!(!stderr.contains("missing from"));
}

#[test]
fn empty_environment_prints_usage_and_exits_clean() {
    let dir = TempDir::new().unwrap();

    let output = run_sitepush(&["--to", ""], dir.path());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));
    // No phantom config file for the unnamed environment
    assert!(!dir.path().join("..s3.json").exists());
}

#[test]
fn default_environment_is_production() {
    let dir = TempDir::new().unwrap();

    let output = run_sitepush(&[], dir.path());
    assert_eq!(output.status.code(), Some(3));
    assert!(dir.path().join(".production.s3.json").exists());
}

#[test]
fn malformed_config_is_a_hard_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".prod.s3.json"), "{not json").unwrap();

    let output = run_sitepush(&["--to", "prod"], dir.path());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(".prod.s3.json"));
}

#[test]
fn missing_source_directory_is_a_hard_error() {
    let dir = TempDir::new().unwrap();
    let config = serde_json::json!({
        "access": "AKIA",
        "secret": "shh",
        "bucket": "my-site",
        "from": "_site"
    });
    std::fs::write(
        dir.path().join(".prod.s3.json"),
        serde_json::to_string_pretty(&config).unwrap(),
    )
    .unwrap();

    let output = run_sitepush(&["--to", "prod", "--no-progress"], dir.path());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("IO error"));
}

#[test]
fn scaffold_message_is_json_safe_in_json_mode() {
    let dir = TempDir::new().unwrap();

    let output = run_sitepush(&["--to", "staging", "--json"], dir.path());
    assert_eq!(output.status.code(), Some(3));

    // JSON mode keeps stdout machine-readable: the human message is
    // suppressed and the scaffold still lands on disk
    assert!(output.stdout.is_empty());
    assert!(dir.path().join(".staging.s3.json").exists());
}
