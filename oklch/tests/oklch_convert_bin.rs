// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use std::fs;

const BIN_NAME: &str = "oklch-convert";

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_stdin_to_stdout() {
    Command::cargo_bin(BIN_NAME)
        .unwrap()
        .arg("--hide-opaque-alpha")
        .write_stdin("--accent: #ff0000;\ncolor: navy;\n")
        .assert()
        .success()
        .stdout("--accent: oklch(0.63 0.26 29.23);\ncolor: oklch(0.27 0.19 264.05);\n");
}

#[test]
fn test_settings_file_controls_alpha() {
    let temp_dir = tempfile::tempdir().unwrap();
    let settings_path = temp_dir.path().join("settings.json");

    fs::write(&settings_path, "{}").unwrap();
    Command::cargo_bin(BIN_NAME)
        .unwrap()
        .arg("--config")
        .arg(&settings_path)
        .write_stdin("red")
        .assert()
        .success()
        .stdout("oklch(0.63 0.26 29.23 / 1)");

    fs::write(&settings_path, r#"{ "useOpacity": false }"#).unwrap();
    Command::cargo_bin(BIN_NAME)
        .unwrap()
        .arg("--config")
        .arg(&settings_path)
        .write_stdin("red")
        .assert()
        .success()
        .stdout("oklch(0.63 0.26 29.23)");
}

#[test]
fn test_no_match_is_not_an_error() {
    let assert = Command::cargo_bin(BIN_NAME)
        .unwrap()
        .arg("--hide-opaque-alpha")
        .write_stdin("margin: 0 auto;\n")
        .assert()
        .success()
        .stdout("margin: 0 auto;\n");

    assert_eq!(
        stderr_of(assert.get_output()),
        "No color definitions found in the selected text.\n"
    );
}

#[test]
fn test_failures_are_reported_but_not_fatal() {
    let invalid = format!("lab({}, 0, 0)", "9".repeat(400));
    let assert = Command::cargo_bin(BIN_NAME)
        .unwrap()
        .arg("--hide-opaque-alpha")
        .write_stdin(format!("a: red;\nb: {invalid};\n"))
        .assert()
        .success()
        .stdout(format!("a: oklch(0.63 0.26 29.23);\nb: {invalid};\n"));

    assert_eq!(
        stderr_of(assert.get_output()),
        format!("Cannot convert colors: {invalid}.\n")
    );
}

#[test]
fn test_in_place() {
    let temp_dir = tempfile::tempdir().unwrap();
    let css_path = temp_dir.path().join("styles.css");
    fs::write(&css_path, ":root {\n  --bg: #abc;\n  --fg: lch(50, 30, 120deg);\n}\n")
        .unwrap();

    Command::cargo_bin(BIN_NAME)
        .unwrap()
        .arg(&css_path)
        .arg("--in-place")
        .arg("--hide-opaque-alpha")
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(&css_path).unwrap(),
        ":root {\n  --bg: oklch(0.78 0.03 248.22);\n  --fg: oklch(0.56 0.08 126.41);\n}\n"
    );
}

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    Command::cargo_bin(BIN_NAME)
        .unwrap()
        .arg("--config")
        .arg(temp_dir.path().join("missing.json"))
        .write_stdin("red")
        .assert()
        .failure();
}
