//! Runs the `gatehouse-cli` binary against a controlled environment.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::process::{Command, Output};

/// Command with only the given variables set, run outside the workspace so
/// no `.env` file is picked up.
fn cli(vars: &[(&str, &str)]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gatehouse-cli"));
    cmd.env_clear().current_dir(std::env::temp_dir()).envs(vars.iter().copied());
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

#[test]
fn test_settings_prints_without_rust_log() {
    let output = cli(&[("GATEHOUSE_REQUIRE_LOGIN", "1")])
        .args(["settings", "--store", "2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("settings for store 2"), "{out}");
    assert!(out.contains("requirelogin/requirelogin = true (raw: 1)"), "{out}");
}

#[test]
fn test_check_prints_every_predicate_and_decision() {
    let output = cli(&[("GATEHOUSE_REQUIRE_LOGIN", "1")])
        .args(["check", "--store", "5", "--customer", "7"])
        .args(["--customer-store", "2", "--group", "1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    for line in [
        "login required:        true",
        "group gating active:   false",
        "group permitted:       false",
        "visitor permitted:     false",
        "decision:              RequireLogin",
    ] {
        assert!(out.contains(line), "missing {line:?} in {out}");
    }
}

#[test]
fn test_incomplete_customer_arguments_fail() {
    let output = cli(&[])
        .args(["check", "--store", "1", "--customer", "7"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[cfg(unix)]
#[test]
fn test_non_utf8_environment_does_not_crash() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = cli(&[("GATEHOUSE_REQUIRE_LOGIN", "1")])
        .env("UNRELATED_VAR", OsStr::from_bytes(b"\xff\xfe"))
        .args(["settings", "--store", "2"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("requirelogin/requirelogin = true"));
}
