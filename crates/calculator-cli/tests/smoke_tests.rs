//! Smoke tests for the keycalc binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn keycalc() -> Command {
    let mut cmd = Command::cargo_bin("keycalc").expect("keycalc binary should exist");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI
// ============================================================================

#[test]
fn test_help_flag() {
    keycalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("script"))
        .stdout(predicate::str::contains("keypad"));
}

#[test]
fn test_no_args_fails() {
    keycalc().assert().failure();
}

// ============================================================================
// eval
// ============================================================================

#[test]
fn test_eval_addition() {
    keycalc()
        .args(["eval", "3", "+", "4", "="])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_eval_chaining_left_to_right() {
    keycalc()
        .args(["eval", "3", "+", "4", "×", "2", "="])
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn test_eval_subtraction_key() {
    keycalc()
        .args(["eval", "9", "-", "1", "2", "="])
        .assert()
        .success()
        .stdout("-3\n");
}

#[test]
fn test_eval_lenient_ignores_second_point() {
    keycalc()
        .args(["eval", "1", ".", "."])
        .assert()
        .success()
        .stdout("1.\n");
}

#[test]
fn test_eval_strict_fails() {
    keycalc()
        .args(["eval", "--strict", "1", ".", "."])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: key '.' rejected"));
}

#[test]
fn test_eval_unknown_key_strict() {
    keycalc()
        .args(["eval", "--strict", "mod"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown key 'mod'"));
}

#[test]
fn test_eval_trace() {
    keycalc()
        .args(["--color", "never", "eval", "--trace", "4", "1/x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/x -> 0.25"))
        .stdout(predicate::str::ends_with("0.25\n"));
}

#[test]
fn test_eval_json() {
    let output = keycalc()
        .args(["eval", "--format", "json", "4", "2", "push"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["display"], "42");
    assert_eq!(value["snapshot"]["stack"][0], "42");
    assert_eq!(value["transcript"][2]["key"], "push");
}

// ============================================================================
// script
// ============================================================================

#[test]
fn test_script_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sum.keys");
    fs::write(&path, "# powers\n2 x^n 1 0 =   # 1024\ninv x^n 2 =\n").unwrap();

    keycalc()
        .arg("script")
        .arg(&path)
        .assert()
        .success()
        .stdout("32\n");
}

#[test]
fn test_script_missing_file() {
    keycalc()
        .args(["script", "/nonexistent/keys.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_script_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.keys");
    fs::write(&path, "# nothing here\n").unwrap();

    keycalc()
        .arg("script")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no keys"));
}

// ============================================================================
// repl and keypad
// ============================================================================

#[test]
fn test_repl_reads_stdin() {
    keycalc()
        .args(["--color", "never", "repl"])
        .write_stdin("6 ×\n7 =\nexit\n")
        .assert()
        .success()
        .stdout("6\n42\n");
}

#[test]
fn test_repl_inverted_control_and_quit() {
    keycalc()
        .args(["--color", "never", "repl"])
        .write_stdin("8 1 inv-on x^n 2 = exit\n")
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_keypad_layout() {
    keycalc()
        .args(["keypad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clr"))
        .stdout(predicate::str::contains("x^n"))
        .stdout(predicate::str::contains("push"));
}

#[test]
fn test_keypad_inverted() {
    keycalc()
        .args(["keypad", "--inverted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arcsin"))
        .stdout(predicate::str::contains("inv*"));
}
