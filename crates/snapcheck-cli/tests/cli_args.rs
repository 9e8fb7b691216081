//! CLI argument validation tests.
//!
//! Tests command-line argument parsing, validation, and error handling.

#![allow(clippy::unwrap_used)]
#![allow(deprecated)] // cargo_bin deprecation

use assert_cmd::Command;
use predicates::prelude::*;
use snapcheck_test_support::SyntheticImageBuilder;
use std::path::{Path, PathBuf};

fn write_fixture(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    SyntheticImageBuilder::checkerboard(16, 16)
        .image
        .save(&path)
        .unwrap();
    path
}

// === Missing/Invalid Path Tests ===

#[test]
fn test_missing_path_shows_error() {
    let mut cmd = Command::cargo_bin("snapcheck").unwrap();
    // No path argument at all - error goes to stderr
    cmd.assert().failure().stderr(
        predicate::str::contains("No paths specified")
            .or(predicate::str::contains("required"))
            .or(predicate::str::contains("PATHS")),
    );
}

#[test]
fn test_nonexistent_path_warns_but_continues() {
    // The CLI warns about nonexistent paths but continues (graceful degradation)
    let mut cmd = Command::cargo_bin("snapcheck").unwrap();
    cmd.arg("/nonexistent/path/to/image.jpg");

    // Should succeed (exit 0) but warn
    cmd.assert()
        .code(0) // No images processed = nothing flagged
        .stderr(
            predicate::str::contains("does not exist").or(predicate::str::contains("not found")),
        );
}

#[test]
fn test_empty_directory() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("snapcheck").unwrap();
    cmd.arg(temp_dir.path());

    // Empty directory should succeed with no output (exit 0)
    cmd.assert().code(predicate::eq(0));
}

// === Format Validation Tests ===

#[test]
fn test_invalid_format_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path(), "test.png");

    let mut cmd = Command::cargo_bin("snapcheck").unwrap();
    cmd.arg("--format").arg("xml").arg(fixture);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("text").or(predicate::str::contains("jsonl")));
}

#[test]
fn test_valid_formats_accepted() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path(), "test.png");

    for format in ["text", "jsonl", "json", "html"] {
        let mut cmd = Command::cargo_bin("snapcheck").unwrap();
        cmd.arg("--format").arg(format).arg("-q").arg(&fixture);

        cmd.assert().code(predicate::in_iter([0, 1]));
    }
}

// === Threshold Validation Tests ===

#[test]
fn test_low_light_threshold_above_range_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path(), "test.png");

    let mut cmd = Command::cargo_bin("snapcheck").unwrap();
    cmd.arg("--low-light-threshold").arg("300").arg(fixture);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("0.0..=255.0").or(predicate::str::contains("invalid")));
}

#[test]
fn test_low_light_threshold_non_numeric_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path(), "test.png");

    let mut cmd = Command::cargo_bin("snapcheck").unwrap();
    cmd.arg("--low-light-threshold").arg("dim").arg(fixture);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a valid number"));
}

#[test]
fn test_negative_dispersion_threshold_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path(), "test.png");

    let mut cmd = Command::cargo_bin("snapcheck").unwrap();
    cmd.arg("--dispersion-threshold=-1.0").arg(fixture);

    cmd.assert().failure();
}

#[test]
fn test_thresholds_accept_boundary_values() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path(), "test.png");

    let mut cmd = Command::cargo_bin("snapcheck").unwrap();
    cmd.arg("--low-light-threshold")
        .arg("0")
        .arg("--dispersion-threshold")
        .arg("0")
        .arg("-q")
        .arg(fixture);

    // With both thresholds at 0 nothing can be flagged
    cmd.assert().code(0);
}

// === Subcommand Tests ===

#[test]
fn test_explicit_analyze_subcommand() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(temp_dir.path(), "test.png");

    let mut cmd = Command::cargo_bin("snapcheck").unwrap();
    cmd.arg("analyze").arg("-q").arg(fixture);

    cmd.assert().code(predicate::in_iter([0, 1]));
}

#[test]
fn test_help_shows_usage() {
    let mut cmd = Command::cargo_bin("snapcheck").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("snapcheck"));
}
