// cardcheck/tests/cli_integration_tests.rs
//! Binary-level tests for the `cardcheck` CLI: verdicts, traces, JSON
//! output, exit codes, and input sources.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

/// Constructs a `Command` for the `cardcheck` binary with a clean
/// environment so host `RUST_LOG` settings cannot leak into assertions.
fn cardcheck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("cardcheck"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_args_shows_usage() {
    cardcheck_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_valid_number_full_trace() {
    cardcheck_cmd()
        .args(["check", "4539 1488 0343 6467"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[INFO] Input normalized (16 digits)"))
        .stdout(predicate::str::contains("[INFO] Length check passed (16 digits)"))
        .stdout(predicate::str::contains("[INFO] Issuer pattern recognized: VISA"))
        .stdout(predicate::str::contains("[INFO] Luhn checksum: PASS"))
        .stdout(predicate::str::contains("bits/digit (threshold: 3.5) FAIL"))
        .stdout(predicate::str::contains("[INFO] Repetition analysis: FAIL"))
        .stdout(predicate::str::contains(
            "[RESULT] Card number is VALID (low confidence)",
        ))
        .stdout(predicate::str::contains("[TIME] Verification completed in"));
}

#[test]
fn test_invalid_number_verdict() {
    cardcheck_cmd()
        .args(["check", "4539144804436467"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[INFO] Luhn checksum: FAIL"))
        .stdout(predicate::str::contains("[RESULT] Card number is INVALID"));
}

#[test]
fn test_length_gate_failure_message() {
    cardcheck_cmd()
        .args(["check", "123456789012"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[INFO] Length check failed (12 digits, accepted 13-19)",
        ))
        .stdout(predicate::str::contains("[RESULT] Card number is INVALID"))
        .stdout(predicate::str::contains("Luhn checksum").not());
}

#[test]
fn test_no_trace_suppresses_info_lines() {
    cardcheck_cmd()
        .args(["check", "--no-trace", "--no-timing", "4539578763621486"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[INFO]").not())
        .stdout(predicate::str::contains(
            "[RESULT] Card number is VALID (low confidence)",
        ));
}

#[test]
fn test_no_timing_suppresses_time_line() {
    cardcheck_cmd()
        .args(["check", "--no-timing", "4539578763621486"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[TIME]").not());
}

#[test]
fn test_fail_on_invalid_exit_code() {
    cardcheck_cmd()
        .args(["check", "--fail-on-invalid", "4539144804436467"])
        .assert()
        .code(2);

    // A valid candidate leaves the exit code alone.
    cardcheck_cmd()
        .args(["check", "--fail-on-invalid", "4539578763621486"])
        .assert()
        .success();
}

#[test]
fn test_stdin_batch() {
    cardcheck_cmd()
        .args(["check", "--no-timing"])
        .write_stdin("4539578763621486\n\n4539144804436467\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("VALID (low confidence)"))
        .stdout(predicate::str::contains("INVALID"));
}

#[test]
fn test_input_file_batch() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let input_path = dir.path().join("candidates.txt");
    fs::write(&input_path, "5172314301540486\n379354508162306\n")?;

    cardcheck_cmd()
        .args(["check", "--no-timing", "-i"])
        .arg(&input_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("MASTERCARD"))
        .stdout(predicate::str::contains("UNKNOWN"));
    Ok(())
}

#[test]
fn test_json_stdout_reports() -> anyhow::Result<()> {
    let output = cardcheck_cmd()
        .args(["check", "--json-stdout", "--no-timing"])
        .write_stdin("4539578763621486\n1111111111111111\n")
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let reports: Vec<Value> = stdout
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;
    assert_eq!(reports.len(), 2);

    assert_eq!(reports[0]["input"], "4539578763621486");
    assert_eq!(reports[0]["report"]["result"]["valid"], true);
    assert_eq!(reports[0]["report"]["result"]["issuer"], "VISA");
    assert_eq!(reports[0]["report"]["result"]["confidence"], "low");
    assert!(reports[0].get("elapsed_ns").is_none());

    assert_eq!(reports[1]["report"]["result"]["valid"], false);
    assert_eq!(reports[1]["report"]["result"]["confidence"], Value::Null);
    assert_eq!(reports[1]["report"]["result"]["entropy_bits"], 0.0);
    Ok(())
}

#[test]
fn test_json_trace_stages_are_tagged() -> anyhow::Result<()> {
    let output = cardcheck_cmd()
        .args(["check", "--json-stdout", "--no-timing", "4539578763621486"])
        .output()?;
    let report: Value = serde_json::from_slice(&output.stdout)?;

    let stages: Vec<&str> = report["report"]["trace"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["stage"].as_str().unwrap())
        .collect();
    assert_eq!(
        stages,
        vec![
            "normalized",
            "length_gate",
            "issuer_detected",
            "luhn_checksum",
            "entropy_score",
            "repetition_scan",
        ]
    );
    Ok(())
}

#[test]
fn test_custom_config_lowers_threshold() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let config_path = dir.path().join("checks.yaml");
    fs::write(&config_path, "entropy:\n  threshold: 3.0\n")?;

    let output = cardcheck_cmd()
        .args(["check", "--json-stdout", "--no-timing", "--config"])
        .arg(&config_path)
        .arg("4539578763621486")
        .output()?;
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["report"]["result"]["entropy_passed"], true);
    assert_eq!(report["report"]["result"]["confidence"], "high");
    Ok(())
}

#[test]
fn test_missing_config_file_fails() {
    cardcheck_cmd()
        .args(["check", "--config", "/nonexistent/checks.yaml", "4539578763621486"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_high_confidence_verdict_has_no_suffix() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let config_path = dir.path().join("checks.yaml");
    fs::write(&config_path, "entropy:\n  threshold: 3.0\n")?;

    cardcheck_cmd()
        .args(["check", "--no-timing", "--config"])
        .arg(&config_path)
        .arg("4539578763621486")
        .assert()
        .success()
        .stdout(predicate::str::contains("[RESULT] Card number is VALID\n"))
        .stdout(predicate::str::contains("low confidence").not());
    Ok(())
}
