//! Binary-level contracts: exit codes and the categories listing. Invalid
//! input must be rejected before any oracle traffic, so these tests run
//! with a dummy API key and no network.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn triage() -> Command {
    let mut cmd = Command::cargo_bin("triage").expect("triage binary");
    cmd.env_remove("GEMINI_API_KEY");
    cmd
}

#[test]
fn categories_lists_catalog_in_order() {
    triage()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("anxiety"))
        .stdout(predicate::str::contains("Negative Thinking"))
        .stdout(predicate::str::contains("addiction"));

    let out = triage().arg("categories").output().unwrap();
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 14);
    assert!(lines[0].starts_with("anxiety"));
    assert!(lines[13].starts_with("addiction"));
}

#[test]
fn empty_input_exits_config_error_without_oracle() {
    triage()
        .args(["screen", ""])
        .env("GEMINI_API_KEY", "dummy-key")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("text is empty"));
}

#[test]
fn over_long_input_exits_config_error_without_oracle() {
    let text = "x".repeat(1001);
    triage()
        .args(["screen", &text])
        .env("GEMINI_API_KEY", "dummy-key")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at most 1000"));
}

#[test]
fn missing_api_key_exits_config_error() {
    triage()
        .args(["screen", "some text"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no oracle API key"));
}

#[test]
fn malformed_config_file_exits_config_error() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "max_input_chars: [oops]").unwrap();

    triage()
        .args(["screen", "some text", "--config"])
        .arg(f.path())
        .env("GEMINI_API_KEY", "dummy-key")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn stdin_input_is_validated_like_argument_input() {
    triage()
        .arg("screen")
        .env("GEMINI_API_KEY", "dummy-key")
        .write_stdin("\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("text is empty"));
}
