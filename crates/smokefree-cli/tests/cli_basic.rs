//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_smokefree"))
        .args(args)
        .env("SMOKEFREE_DATA_DIR", data_dir)
        .env_remove("SMOKEFREE_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_ok(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    stdout
}

fn with_quit(quit: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    run_ok(dir.path(), &["quit", "set", quit]);
    dir
}

#[test]
fn status_without_quit_instant_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["status"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("no quit instant set"));
}

#[test]
fn quit_set_normalizes_and_persists() {
    let dir = with_quit("2025-01-01T10:00:00+01:00");
    let shown = run_ok(dir.path(), &["quit", "show"]);
    assert_eq!(shown.trim(), "2025-01-01T09:00:00.000Z");
    assert!(dir.path().join("preferences.toml").exists());
}

#[test]
fn quit_set_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["quit", "set", "tomorrow-ish"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("quit_instant"));
}

#[test]
fn status_json_reports_the_seven_day_scenario() {
    let dir = with_quit("2025-01-01T00:00:00Z");
    let out = run_ok(
        dir.path(),
        &["status", "--json", "--at", "2025-01-08T03:00:00Z"],
    );
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["stats"]["cigarettes_avoided"], 142);
    assert_eq!(json["stats"]["packs_avoided"], 7);
    assert_eq!(json["stats"]["money_saved"], 70.0);
    assert_eq!(json["elapsed"]["days"], 7);
    assert_eq!(json["elapsed"]["hours"], 3);
}

#[test]
fn status_text_uses_nickname_and_profile() {
    let dir = with_quit("2025-01-01T00:00:00Z");
    run_ok(dir.path(), &["config", "set", "nickname", "Robin"]);
    run_ok(dir.path(), &["config", "set", "cost_per_pack", "12.50"]);
    let out = run_ok(dir.path(), &["status", "--at", "2025-01-22T00:00:00Z"]);

    assert!(out.contains("Hi Robin!"));
    assert!(out.contains("Money saved:         262.50"));
    assert!(out.contains("Health regeneration: 32%"));
}

#[test]
fn benefits_filters_by_category() {
    let dir = with_quit("2025-01-01T00:00:00Z");
    let out = run_ok(
        dir.path(),
        &["benefits", "--category", "sex", "--json", "--at", "2025-01-15T00:00:00Z"],
    );
    let list: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert!(!list.is_empty());
    assert!(list.iter().all(|b| b["category"] == "sex"));
    let libido = list.iter().find(|b| b["name"] == "Improved Libido").unwrap();
    assert_eq!(libido["progress_percent"], 100);
}

#[test]
fn benefits_rejects_unknown_category() {
    let dir = with_quit("2025-01-01T00:00:00Z");
    let (_, stderr, code) = run_cli(dir.path(), &["benefits", "--category", "liver"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown category"));
}

#[test]
fn config_rejects_unknown_keys() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["config", "set", "theme", "dark"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown preference key"));
}

#[test]
fn config_list_shows_effective_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_ok(dir.path(), &["config", "list"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["effective_profile"]["cigarettes_per_day"], 20);
    assert_eq!(json["effective_profile"]["cost_per_pack"], 10.0);
}

#[test]
fn watch_emits_events_then_stops() {
    let dir = with_quit("2025-01-01T00:00:00Z");
    let out = run_ok(dir.path(), &["watch", "--ticks", "2"]);
    let events: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(events[0]["type"], "SchedulerStarted");
    let ticks = events.iter().filter(|e| e["type"] == "ElapsedTick").count();
    assert_eq!(ticks, 2);
    assert_eq!(events.last().unwrap()["type"], "SchedulerStopped");
}

#[test]
fn startup_logs_catalog_check_at_debug() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_smokefree"))
        .args(["quit", "show"])
        .env("SMOKEFREE_DATA_DIR", dir.path())
        .env("SMOKEFREE_LOG", "debug")
        .output()
        .expect("Failed to execute CLI command");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("milestone catalog validated"), "{stderr}");
    assert!(!stderr.contains("inconsistent"), "{stderr}");

    let (_, quiet, _) = run_cli(dir.path(), &["quit", "show"]);
    assert!(!quiet.contains("milestone catalog validated"));
}

#[test]
fn benefits_by_name_shows_details() {
    let dir = with_quit("2025-01-01T00:00:00Z");
    let out = run_ok(
        dir.path(),
        &["benefits", "--name", "Blood Pressure Drops", "--at", "2025-01-01T00:10:00Z"],
    );
    assert_eq!(out.lines().filter(|l| l.starts_with('[')).count(), 1);
    assert!(out.contains(" 50%"));
    assert!(out.contains("pre-cigarette level"));

    let (_, stderr, code) = run_cli(dir.path(), &["benefits", "--name", "Glowing Aura"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown benefit"));
}
