//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.
//! FOCUSFUEL_ENV=dev keeps test data out of the production data dir.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "focusfuel-cli", "--"])
        .args(args)
        .env("FOCUSFUEL_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_slots_show() {
    let (stdout, _, code) = run_cli(&["slots", "show"]);
    assert_eq!(code, 0, "Slots show failed");
    assert!(stdout.contains("Morning"));
}

#[test]
fn test_slots_show_json() {
    let (stdout, _, code) = run_cli(&["slots", "show", "--json"]);
    assert_eq!(code, 0, "Slots show JSON failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let slots = parsed.as_array().unwrap();
    assert_eq!(slots.len(), 5);
}

#[test]
fn test_slots_set_unknown_id_fails() {
    let (_, stderr, code) = run_cli(&["slots", "set", "brunch", "high"]);
    assert_ne!(code, 0, "Unknown slot id should fail");
    assert!(stderr.contains("Unknown slot id"));
}

#[test]
fn test_slots_set_invalid_level_fails() {
    let (_, stderr, code) = run_cli(&["slots", "set", "morning", "turbo"]);
    assert_ne!(code, 0, "Invalid level should fail");
    assert!(stderr.contains("Invalid level"));
}

#[test]
fn test_schedule_show() {
    let (stdout, _, code) = run_cli(&["schedule", "show"]);
    assert_eq!(code, 0, "Schedule show failed");
    assert!(stdout.contains("suggested:"));
}

#[test]
fn test_schedule_show_json() {
    let (stdout, _, code) = run_cli(&["schedule", "show", "--json"]);
    assert_eq!(code, 0, "Schedule show JSON failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert!(entries[0]["suggestion"]["name"].is_string());
}

// Mutating commands share one dev data dir, so the whole flow lives in a
// single test to keep it away from the parallel read-only tests.
#[test]
fn test_slot_logging_flow() {
    let (stdout, _, code) = run_cli(&["slots", "set", "evening", "high"]);
    assert_eq!(code, 0, "Slots set failed");
    assert!(stdout.contains("evening"));

    let (stdout, _, code) = run_cli(&["schedule", "show", "--json"]);
    assert_eq!(code, 0, "Schedule show failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let evening = parsed
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["slot"]["id"] == "evening")
        .unwrap();
    assert_eq!(evening["suggestion"]["name"], "Design landing");

    let (stdout, _, code) = run_cli(&["slots", "reset"]);
    assert_eq!(code, 0, "Slots reset failed");
    assert!(stdout.contains("defaults"));

    let (stdout, _, code) = run_cli(&["slots", "show", "--json"]);
    assert_eq!(code, 0, "Slots show failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let evening = parsed
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == "evening")
        .unwrap();
    assert_eq!(evening["level"], "low");
}

#[test]
fn test_landing_show() {
    let (stdout, _, code) = run_cli(&["landing", "show"]);
    assert_eq!(code, 0, "Landing show failed");
    assert!(stdout.contains("FocusFuel"));
    assert!(stdout.contains("How it works"));
}

#[test]
fn test_landing_features() {
    let (stdout, _, code) = run_cli(&["landing", "features"]);
    assert_eq!(code, 0, "Landing features failed");
    assert!(stdout.contains("Energy-first scheduling"));
}
