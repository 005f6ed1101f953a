#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn assist(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("assist").unwrap();
    cmd.current_dir(dir.path())
        .env("ASSIST_ROOT", dir.path())
        .env_remove("ASSIST_LOG_PATH");
    cmd
}

fn write_log(dir: &TempDir, entries: serde_json::Value) {
    std::fs::write(
        dir.path().join("accepted_log.json"),
        serde_json::to_string_pretty(&entries).unwrap(),
    )
    .unwrap();
}

// ---------------------------------------------------------------------------
// assist tickets
// ---------------------------------------------------------------------------

#[test]
fn tickets_table_lists_seed() {
    let dir = TempDir::new().unwrap();
    assist(&dir)
        .arg("tickets")
        .assert()
        .success()
        .stdout(predicate::str::contains("tkt_001"))
        .stdout(predicate::str::contains("Double charged on my bill"));
}

#[test]
fn tickets_json() {
    let dir = TempDir::new().unwrap();
    let out = assist(&dir).args(["tickets", "--json"]).output().unwrap();
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1]["ticket_id"], "tkt_002");
}

#[test]
fn configured_tickets_replace_seed() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("assist.yaml"),
        "tickets:\n  - ticket_id: vip_1\n    subject: Refund request\n    body: Please refund.\n    status: open\n",
    )
    .unwrap();
    assist(&dir)
        .arg("tickets")
        .assert()
        .success()
        .stdout(predicate::str::contains("vip_1"))
        .stdout(predicate::str::contains("tkt_001").not());
}

#[test]
fn malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("assist.yaml"), "server: [unclosed").unwrap();
    assist(&dir)
        .arg("tickets")
        .assert()
        .failure()
        .stderr(predicate::str::contains("assist.yaml"));
}

// ---------------------------------------------------------------------------
// assist suggest
// ---------------------------------------------------------------------------

#[test]
fn suggest_known_ticket() {
    let dir = TempDir::new().unwrap();
    assist(&dir)
        .args(["suggest", "tkt_001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'Internet not working'"))
        .stdout(predicate::str::contains("0.75"));
}

#[test]
fn suggest_unknown_ticket_fails() {
    let dir = TempDir::new().unwrap();
    assist(&dir)
        .args(["suggest", "tkt_missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ticket not found"));
}

// ---------------------------------------------------------------------------
// assist log / metrics
// ---------------------------------------------------------------------------

#[test]
fn log_empty_when_file_missing() {
    let dir = TempDir::new().unwrap();
    assist(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("empty"));
}

#[test]
fn log_lists_entries() {
    let dir = TempDir::new().unwrap();
    write_log(
        &dir,
        serde_json::json!([
            {"ticket_id": "tkt_001", "action": "accepted", "tags": [{"tag": "support", "score": 0.9}], "response_time_min": 5, "timestamp": "2025-01-01T00:00:00.000000Z"},
            {"ticket_id": "tkt_002", "action": "edited", "tags": [], "response_time_min": null, "timestamp": "2025-01-01T00:05:00.000000Z"}
        ]),
    );
    assist(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("tkt_002"))
        .stdout(predicate::str::contains("edited"))
        .stdout(predicate::str::contains("support"));
}

#[test]
fn metrics_json_from_log() {
    let dir = TempDir::new().unwrap();
    write_log(
        &dir,
        serde_json::json!([
            {"ticket_id": "tkt_001", "action": "accepted", "tags": [], "response_time_min": 10, "timestamp": "t1"},
            {"ticket_id": "tkt_002", "action": "edited", "tags": [], "response_time_min": 20, "timestamp": "t2"},
            {"ticket_id": "tkt_001", "action": "accepted", "tags": [], "response_time_min": null, "timestamp": "t3"}
        ]),
    );
    let out = assist(&dir)
        .args(["metrics", "--total-shown", "10", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["suggestions_accepted"], 2);
    assert_eq!(json["acceptance_rate_percent"].as_f64(), Some(20.0));
    assert_eq!(json["avg_response_time_min"].as_f64(), Some(15.0));
    assert_eq!(json["log_length"], 3);
}

#[test]
fn log_path_flag_points_elsewhere() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("other.json"),
        r#"[{"action": "accepted"}]"#,
    )
    .unwrap();
    let out = assist(&dir)
        .args(["metrics", "--json", "--log-path", "other.json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["log_length"], 1);
}
