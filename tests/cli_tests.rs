//! Integration tests for the demo binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("densemat"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("densemat"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("densemat"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Demonstrate dense matrix construction"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_demo_runs_against_written_config() {
    let tmp = TempDir::new().expect("tmp");
    let config = tmp.path().join("config.ini");
    fs::write(&config, "rows=3\ncolumns=3\ninitial_value=2.5\n").expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("densemat"));
    cmd.args(["--config", config.to_str().expect("utf8 path")]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 3 2.5"))
        .stdout(predicate::str::contains("Literal matrix:\n1 2 3 \n4 5 6 \n7 8 9 "))
        .stdout(predicate::str::contains("Configured matrix:\n2.5 2.5 2.5 "))
        .stdout(predicate::str::contains("Sum of all three:\n4.5 5.5 6.5 "));
}

#[test]
fn test_demo_reports_nonconformant_sum() {
    let tmp = TempDir::new().expect("tmp");
    let config = tmp.path().join("config.ini");
    fs::write(&config, "rows=2\ncolumns=2\ninitial_value=1.0\n").expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("densemat"));
    cmd.args(["--config", config.to_str().expect("utf8 path")]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("not conformant for addition"))
        .stdout(predicate::str::contains("2x2 vs 3x3"));
}

#[test]
fn test_demo_fails_on_missing_config() {
    let tmp = TempDir::new().expect("tmp");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("densemat"));
    cmd.args(["--config", tmp.path().join("nope.ini").to_str().expect("utf8 path")]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to open config file"));
}

#[test]
fn test_demo_fails_on_zero_dimension_config() {
    let tmp = TempDir::new().expect("tmp");
    let config = tmp.path().join("config.ini");
    fs::write(&config, "rows=0\ncolumns=4\n").expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("densemat"));
    cmd.args(["--config", config.to_str().expect("utf8 path")]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("greater than 0"));
}
