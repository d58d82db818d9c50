//! Smoke tests for the snippetbox binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_flags() {
    let mut cmd = Command::cargo_bin("snippetbox").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--addr"))
        .stdout(predicate::str::contains("--dsn"))
        .stdout(predicate::str::contains("--query-timeout-secs"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("snippetbox").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_malformed_dsn_fails_startup() {
    let mut cmd = Command::cargo_bin("snippetbox").unwrap();
    cmd.args(["--dsn", "not a connection string", "--addr", "127.0.0.1:0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to database"));
}

#[test]
fn test_invalid_addr_is_rejected() {
    let mut cmd = Command::cargo_bin("snippetbox").unwrap();
    cmd.args(["--addr", "not-an-address"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
