//! CLI tests for the `ag` binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_stub_query_streams_sse_frames() {
    let mut cmd = Command::cargo_bin("ag").unwrap();
    cmd.args(["--source", "stub", "Show my GitHub activity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data: {\"type\":\"agent.loading\""))
        .stdout(predicate::str::contains("\"type\":\"agent.message\""))
        .stdout(predicate::str::contains("\"type\":\"ui.render\""))
        .stdout(predicate::str::contains("\"title\":\"GitHub Overview\""));
}

#[test]
fn test_ndjson_framing() {
    let mut cmd = Command::cargo_bin("ag").unwrap();
    let assert = cmd
        .args(["--source", "stub", "--framing", "ndjson", "compare my repos"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 3, "loading, message, render");
    for line in lines {
        assert!(line.starts_with('{'), "each line is a bare JSON object: {}", line);
    }
}

#[test]
fn test_failing_source_exits_nonzero() {
    let mut cmd = Command::cargo_bin("ag").unwrap();
    cmd.args(["--source", "stub-failing", "Show my GitHub activity"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"type\":\"agent.error\""))
        .stdout(predicate::str::contains("DATA_UNAVAILABLE"));
}

#[test]
fn test_unknown_provider_fails_validation() {
    let mut cmd = Command::cargo_bin("ag").unwrap();
    cmd.args(["--source", "telepathy", "anything"]).assert().failure();
}

#[test]
fn test_missing_query_is_an_error() {
    let mut cmd = Command::cargo_bin("ag").unwrap();
    cmd.assert().failure();
}
