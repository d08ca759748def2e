//! Integration tests for doctor command

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use serde_json::Value;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn doctor_json(dir: &TempDir, extra: &[&str]) -> Value {
    let output = Command::new(cargo_bin!(env!("CARGO_PKG_NAME")))
        .env_remove("RGBRIDGE_RG_PATH")
        .current_dir(dir.path())
        .args(["doctor", "--json"])
        .args(extra)
        .output()
        .expect("run doctor");

    assert!(output.status.success(), "doctor must always exit 0");
    serde_json::from_slice(&output.stdout).expect("doctor --json prints JSON")
}

fn check<'a>(output: &'a Value, id: &str) -> &'a Value {
    output["checks"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == id)
        .unwrap_or_else(|| panic!("missing check {id}: {output}"))
}

#[test]
fn test_doctor_exits_zero_without_config() {
    let temp = TempDir::new().unwrap();

    Command::new(cargo_bin!(env!("CARGO_PKG_NAME")))
        .current_dir(temp.path())
        .arg("doctor")
        .assert()
        .success();
}

#[test]
fn test_doctor_reports_effective_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("rgbridge.toml"),
        "max_result_chars = 40000\ntimeout_secs = 30\n",
    )
    .unwrap();
    let root = temp.path().display().to_string();

    let output = doctor_json(&temp, &["--allow-dir", &root, "--max-output-bytes", "1024"]);

    let config = &output["config"];
    assert_eq!(config["allowed_dirs"], serde_json::json!([root]));
    assert_eq!(config["max_result_chars"], 40000);
    assert_eq!(config["max_output_bytes"], 1024);
    assert_eq!(config["timeout_secs"], 30);
    assert_eq!(check(&output, "config_valid")["status"], "ok");
    assert_eq!(check(&output, "allowed_dirs")["status"], "ok");
}

#[test]
fn test_doctor_reports_missing_engine() {
    let temp = TempDir::new().unwrap();

    let output = doctor_json(&temp, &["--rg-path", "/nonexistent/bin/rg"]);

    let engine = check(&output, "rg_available");
    assert_eq!(engine["status"], "error");
    assert_eq!(engine["details"]["requested"], "/nonexistent/bin/rg");
}

#[test]
fn test_doctor_reports_invalid_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("rgbridge.toml"), "max_output_bytes = \"big\"\n").unwrap();

    let output = doctor_json(&temp, &[]);

    assert_eq!(check(&output, "config_valid")["status"], "error");
    assert!(output.get("config").is_none());
}

#[test]
fn test_doctor_finds_installed_engine() {
    let rg = rgbridge_testkit::require_rg!();
    let temp = TempDir::new().unwrap();

    let output = doctor_json(&temp, &["--rg-path", &rg.display().to_string()]);

    let engine = check(&output, "rg_available");
    assert_eq!(engine["status"], "ok");
    assert!(engine["message"].as_str().unwrap().starts_with("ripgrep "));
}
