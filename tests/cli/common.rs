//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("a11ymate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("a11ymate is a CLI linter"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("a11ymate")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("a11ymate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("a11ymate")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_lint_help_lists_rules() {
    cargo_bin_cmd!("a11ymate")
        .args(["lint", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("img-alt"))
        .stdout(predicate::str::contains("mainTag"));
}

#[test]
fn test_diff_requires_fix() {
    cargo_bin_cmd!("a11ymate")
        .args(["lint", "--diff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--fix"));
}

#[test]
fn test_missing_file() {
    cargo_bin_cmd!("a11ymate")
        .args(["lint", "does-not-exist.html"])
        .assert()
        .failure();
}
