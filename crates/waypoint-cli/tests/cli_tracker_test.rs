//! End-to-end tests for the `waypoint` binary.
//!
//! Each test points the binary at a scratch data file and config dir so
//! nothing touches the real user directories.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn waypoint(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("waypoint").unwrap();
    cmd.env("WAYPOINT_DATA_FILE", dir.path().join("tracker.json"))
        .env("WAYPOINT_CONFIG_DIR", dir.path().join("config"))
        .env_remove("RUST_LOG");
    cmd
}

fn json_out(dir: &TempDir, args: &[&str]) -> Value {
    let output = waypoint(dir).arg("--json").args(args).output().unwrap();
    assert!(
        output.status.success(),
        "command {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn ids(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn fresh_install_shows_seed_dashboard() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("29% (2/7)"))
        .stdout(predicate::str::contains("Software Architect"))
        .stdout(predicate::str::contains("All caught up."));
}

#[test]
fn read_only_commands_do_not_create_the_data_file() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir).arg("dashboard").assert().success();
    assert!(!dir.path().join("tracker.json").exists());
}

#[test]
fn toggling_a_goal_updates_progress_and_persists() {
    let dir = TempDir::new().unwrap();
    let toggled = json_out(&dir, &["goal", "toggle", "g4"]);
    assert_eq!(toggled["isCompleted"], false);
    assert!(dir.path().join("tracker.json").exists());

    let dashboard = json_out(&dir, &["dashboard"]);
    assert_eq!(dashboard["progress"]["completed"], 1);
    assert_eq!(dashboard["progress"]["percent"], 14);
    assert_eq!(ids(&dashboard["activeMonthlyGoals"]), ["g4"]);
}

#[test]
fn deleting_a_path_removes_its_goals() {
    let dir = TempDir::new().unwrap();
    let result = json_out(&dir, &["path", "delete", "1"]);
    assert_eq!(result["deleted"], true);
    assert_eq!(result["removedGoals"], 4);

    let goals = json_out(&dir, &["goal", "list"]);
    assert_eq!(ids(&goals), ["g5", "g6", "g7"]);
    assert_eq!(ids(&json_out(&dir, &["path", "list"])), ["2", "3"]);
}

#[test]
fn path_detail_groups_goals_by_timeframe() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir)
        .args(["path", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5-Year Vision - The North Star"))
        .stdout(predicate::str::contains("6-Month Focus - Core Momentum\n  (none)"))
        .stdout(predicate::str::contains("[x] Establish Writing Daily Habit"));

    let detail = json_out(&dir, &["path", "show", "1"]);
    let sections = detail["sections"].as_array().unwrap();
    let timeframes: Vec<_> = sections.iter().map(|s| s["timeframe"].as_str().unwrap()).collect();
    assert_eq!(timeframes, ["5y", "1y", "6m", "monthly"]);
    assert_eq!(detail["progress"]["percent"], 25);
}

#[test]
fn adding_a_path_and_goal() {
    let dir = TempDir::new().unwrap();
    let path = json_out(
        &dir,
        &["path", "add", "--title", "Chef", "--description", "Run a kitchen", "--color", "bg-rose-500"],
    );
    let path_id = path["id"].as_str().unwrap().to_string();
    assert_eq!(path["color"], "bg-rose-500");
    assert!(path.get("motivation").is_none());

    let goal = json_out(
        &dir,
        &["goal", "add", "--path", path_id.as_str(), "--title", "Knife skills", "--timeframe", "6m", "--due", "2027-01-31"],
    );
    assert_eq!(goal["careerPathId"], path_id.as_str());
    assert_eq!(goal["timeframe"], "6m");
    assert_eq!(goal["isCompleted"], false);
    assert_eq!(goal["dueDate"], "2027-01-31");

    let listed = json_out(&dir, &["goal", "list", "--path", path_id.as_str()]);
    assert_eq!(ids(&listed), [goal["id"].as_str().unwrap()]);
}

#[test]
fn blank_path_fields_are_rejected() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir)
        .args(["path", "add", "--title", "  ", "--description", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in the title and description"));
    assert!(!dir.path().join("tracker.json").exists());
}

#[test]
fn goals_must_reference_an_existing_path() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir)
        .args(["goal", "add", "--path", "99", "--title", "Orphan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown career path: 99"));
}

#[test]
fn unknown_timeframe_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir)
        .args(["goal", "add", "--path", "1", "--title", "Soon", "--timeframe", "weekly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown timeframe"));
}

#[test]
fn unknown_ids_are_no_ops() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir)
        .args(["goal", "toggle", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing changed"));

    let result = json_out(&dir, &["goal", "delete", "nope"]);
    assert_eq!(result["deleted"], false);
    assert_eq!(json_out(&dir, &["goal", "list"]).as_array().unwrap().len(), 7);
}

#[test]
fn goal_update_patches_fields() {
    let dir = TempDir::new().unwrap();
    let updated = json_out(
        &dir,
        &["goal", "update", "g3", "--title", "Pass the CKA", "--completed", "true", "--clear-parent"],
    );
    assert_eq!(updated["id"], "g3");
    assert_eq!(updated["title"], "Pass the CKA");
    assert_eq!(updated["isCompleted"], true);
    assert!(updated.get("parentGoalId").is_none());

    let completed = json_out(&dir, &["goal", "list", "--completed"]);
    assert_eq!(ids(&completed), ["g3", "g4", "g7"]);
}

#[test]
fn review_captures_completed_goals_at_submission() {
    let dir = TempDir::new().unwrap();
    let review = json_out(
        &dir,
        &["review", "add", "--summary", "Good week", "--priority", "Write", "--priority", "Ship"],
    );
    assert_eq!(review["completedGoalIds"], serde_json::json!(["g4", "g7"]));
    assert_eq!(review["priorities"], serde_json::json!(["Write", "Ship"]));

    json_out(&dir, &["goal", "toggle", "g4"]);
    json_out(&dir, &["goal", "delete", "g7"]);

    let reviews = json_out(&dir, &["review", "list"]);
    assert_eq!(reviews.as_array().unwrap().len(), 1);
    assert_eq!(reviews[0]["completedGoalIds"], serde_json::json!(["g4", "g7"]));
}

#[test]
fn review_requires_a_reflection() {
    let dir = TempDir::new().unwrap();
    waypoint(&dir)
        .args(["review", "add", "--summary", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please record your mindset reflection."));
}

#[test]
fn corrupt_data_file_falls_back_to_seed() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("tracker.json"), "{ definitely not json").unwrap();
    let goals = json_out(&dir, &["goal", "list"]);
    assert_eq!(goals.as_array().unwrap().len(), 7);
}

#[test]
fn unreadable_data_file_is_an_error_not_a_reseed() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("tracker.json")).unwrap();
    waypoint(&dir)
        .args(["goal", "toggle", "g1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load tracker state"));
    assert!(dir.path().join("tracker.json").is_dir());
}

#[test]
fn config_data_file_is_used_when_no_override() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("elsewhere.json");

    let mut set = Command::cargo_bin("waypoint").unwrap();
    set.env("WAYPOINT_CONFIG_DIR", dir.path().join("config"))
        .env_remove("WAYPOINT_DATA_FILE")
        .args(["config", "set-data-file"])
        .arg(&target)
        .assert()
        .success();
    assert!(dir.path().join("config").join("config.json").exists());

    let mut toggle = Command::cargo_bin("waypoint").unwrap();
    toggle
        .env("WAYPOINT_CONFIG_DIR", dir.path().join("config"))
        .env_remove("WAYPOINT_DATA_FILE")
        .args(["goal", "toggle", "g1"])
        .assert()
        .success();
    assert!(target.exists());

    let mut show = Command::cargo_bin("waypoint").unwrap();
    let output = show
        .env("WAYPOINT_CONFIG_DIR", dir.path().join("config"))
        .env_remove("WAYPOINT_DATA_FILE")
        .args(["--json", "config", "show"])
        .output()
        .unwrap();
    let info: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["dataFile"], target.display().to_string());
    assert_eq!(info["exists"], true);
    assert_eq!(info["logFormat"], "text");
    assert!(info.get("config_path").is_none());
}
