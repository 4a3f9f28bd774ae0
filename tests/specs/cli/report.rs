// SPDX-License-Identifier: MIT

//! Rust specs for offline report generation.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rdm() -> Command {
    cargo_bin_cmd!("rdm")
}

const EPICS_SNAPSHOT: &str = r#"{
  "issues": [
    {
      "key": "DM-1",
      "fields": {
        "summary": "W16 Build index",
        "status": { "name": "To Do" },
        "customfield_10500": "02C.06.02.03",
        "customfield_10202": 20,
        "issuelinks": [
          {
            "type": { "inward": "is blocked by" },
            "inwardIssue": { "key": "DM-2", "fields": { "summary": "Schema first" } }
          }
        ]
      }
    },
    {
      "key": "DM-2",
      "fields": {
        "summary": "FY16 Design schema",
        "status": { "name": "Done" },
        "customfield_10500": "02C.06.02.03",
        "customfield_10202": 10
      }
    },
    {
      "key": "DM-3",
      "fields": { "summary": "Unplaced work", "status": { "name": "To Do" } }
    }
  ]
}"#;

const MILESTONES_SNAPSHOT: &str = r#"{
  "issues": [
    {
      "key": "DLP-1",
      "fields": { "summary": "Index online", "fixVersions": [{ "name": "W16" }] }
    }
  ]
}"#;

/// Set up a temp dir with snapshot fixtures and a config pointing at them.
fn init_temp() -> TempDir {
    init_temp_with(EPICS_SNAPSHOT, MILESTONES_SNAPSHOT)
}

fn init_temp_with(epics: &str, milestones: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("epics.snapshot.json"), epics).unwrap();
    std::fs::write(temp.path().join("milestones.snapshot.json"), milestones).unwrap();
    temp
}

fn report_html(temp: &TempDir, extra_args: &[&str]) -> String {
    let mut cmd = rdm();
    cmd.arg("--offline").arg("--out").arg("report.html");
    for arg in extra_args {
        cmd.arg(arg);
    }
    cmd.current_dir(temp.path()).assert().success();
    std::fs::read_to_string(temp.path().join("report.html")).unwrap()
}

#[test]
fn offline_run_writes_a_report() {
    let temp = init_temp();
    let html = report_html(&temp, &[]);

    assert!(html.contains("Build index"));
    assert!(html.contains("Design schema"));
    assert!(html.contains("Unplaced work"));
    assert!(html.contains("Index online"));
}

#[test]
fn report_is_byte_stable_across_runs() {
    let temp = init_temp();
    let first = report_html(&temp, &[]);
    let second = report_html(&temp, &[]);
    assert_eq!(first, second);
}

#[test]
fn no_done_hides_completed_epics() {
    let temp = init_temp();
    let html = report_html(&temp, &["--no-done"]);

    assert!(!html.contains("Design schema"));
    assert!(html.contains("Build index"));
}

#[test]
fn no_blockers_hides_nested_blockers() {
    let temp = init_temp();
    let with_blockers = report_html(&temp, &[]);
    assert!(with_blockers.contains("Schema first"));

    let html = report_html(&temp, &["--no-blockers"]);
    assert!(!html.contains("Schema first"));
    assert!(html.contains("Build index"));
}

#[test]
fn output_is_discarded_without_out_flag() {
    let temp = init_temp();
    rdm()
        .arg("--offline")
        .current_dir(temp.path())
        .assert()
        .success();
    assert!(!temp.path().join("report.html").exists());
}

#[test]
fn missing_snapshot_fails_with_hint() {
    let temp = TempDir::new().unwrap();
    rdm()
        .arg("--offline")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("snapshot not found"))
        .stderr(predicate::str::contains("--dump-snapshots"));
}

#[test]
fn bad_milestone_label_is_fatal_and_writes_nothing() {
    let bad_milestones = r#"{
      "issues": [
        { "key": "DLP-9", "fields": { "summary": "x", "fixVersions": [{ "name": "oops" }] } }
      ]
    }"#;
    let temp = init_temp_with(EPICS_SNAPSHOT, bad_milestones);
    rdm()
        .arg("--offline")
        .arg("--out")
        .arg("report.html")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("DLP-9"));
    assert!(!temp.path().join("report.html").exists());
}

#[test]
fn malformed_snapshot_is_fatal() {
    let temp = init_temp_with("not json at all", MILESTONES_SNAPSHOT);
    rdm()
        .arg("--offline")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed search payload"));
}

#[test]
fn config_overrides_snapshot_paths() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("captured-epics.json"), EPICS_SNAPSHOT).unwrap();
    std::fs::write(temp.path().join("captured-milestones.json"), MILESTONES_SNAPSHOT).unwrap();
    std::fs::write(
        temp.path().join("rdm.toml"),
        r#"
[snapshots]
epics = "captured-epics.json"
milestones = "captured-milestones.json"
"#,
    )
    .unwrap();

    let html = report_html(&temp, &[]);
    assert!(html.contains("Build index"));
}
