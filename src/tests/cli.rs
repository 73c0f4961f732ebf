//! Exit-code tests against the built binary. Validation failures must exit
//! 1 with usage on stderr before any network activity.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn binary() -> Command {
    Command::cargo_bin("retail-predictions").unwrap()
}

#[test]
fn test_predict_missing_event_flags_exits_one() {
    binary()
        .args(["predict", "-p", "123456", "-s", "default_config"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing required flag: --type"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_predict_missing_project_exits_one() {
    binary()
        .args([
            "predict",
            "-s",
            "default_config",
            "--type",
            "purchase-complete",
            "--visitor",
            "v1",
            "--product",
            "p1",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing required flag: --project"));
}

#[test]
fn test_batch_missing_input_exits_one() {
    binary()
        .args(["batch", "-p", "123456", "-s", "default_config"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing required flag: --input"));
}

#[test]
fn test_batch_count_out_of_range_exits_one() {
    for count in ["0", "101"] {
        binary()
            .args([
                "batch",
                "-p",
                "123456",
                "-s",
                "default_config",
                "-i",
                "events.json",
                "-n",
                count,
            ])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("between 1 and 100"));
    }
}

#[test]
fn test_batch_unreadable_file_exits_one() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    binary()
        .args([
            "batch",
            "-p",
            "123456",
            "-s",
            "default_config",
            "-i",
            path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Reading the input file"));
}

#[test]
fn test_batch_empty_array_succeeds_without_network() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.json");
    fs::write(&path, "[]").unwrap();

    // The run ends before a client is even constructed.
    binary()
        .args([
            "batch",
            "-p",
            "123456",
            "-s",
            "default_config",
            "-i",
            path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("No user events"));
}

#[test]
fn test_batch_bounds_accept_one_and_one_hundred() {
    // Boundary counts pass validation; the run then fails on the missing
    // file, not on the count.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");
    for count in ["1", "100"] {
        binary()
            .args([
                "batch",
                "-p",
                "123456",
                "-s",
                "default_config",
                "-i",
                path.to_str().unwrap(),
                "-n",
                count,
            ])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Reading the input file"));
    }
}
