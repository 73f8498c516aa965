//! Integration tests for the Datamill CLI

use assert_cmd::Command;
use predicates::prelude::*;

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("datamill").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parallel in-memory bulk data processing"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("datamill").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("datamill"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("datamill").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Small demo run exercises the whole engine surface
#[test]
fn test_demo_small_image() {
    let mut cmd = Command::cargo_bin("datamill").unwrap();
    cmd.args(["demo", "--width", "30", "--height", "30", "--threads", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pipeline complete"))
        .stdout(predicate::str::contains("bright pixels"));
}

/// JSON mode emits a parseable summary and nothing else on stdout
#[test]
fn test_demo_json_summary() {
    let mut cmd = Command::cargo_bin("datamill").unwrap();
    let output = cmd
        .args([
            "demo", "--width", "40", "--height", "25", "--threads", "3", "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["pixels"], 1000);
    assert_eq!(summary["threads"], 3);
    assert!(summary["bright_pixels"].as_u64().is_some());
    assert_eq!(summary["average_color"].as_array().unwrap().len(), 3);
}

/// Zero threads is corrected to a positive default, not rejected
#[test]
fn test_demo_auto_threads() {
    let mut cmd = Command::cargo_bin("datamill").unwrap();
    cmd.args([
        "demo", "--width", "10", "--height", "10", "--threads", "0", "--json",
    ])
    .assert()
    .success();
}
