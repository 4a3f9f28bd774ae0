// SPDX-License-Identifier: MIT

//! Rust specs for the flag surface.

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

#[test]
fn help_documents_the_flag_surface() {
    rdm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-blockers"))
        .stdout(predicate::str::contains("--no-done"))
        .stdout(predicate::str::contains("--out"))
        .stdout(predicate::str::contains("--offline"))
        .stdout(predicate::str::contains("--dump-snapshots"));
}

#[test]
fn offline_and_dump_conflict() {
    rdm()
        .arg("--offline")
        .arg("--dump-snapshots")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn completions_print_a_script() {
    rdm()
        .arg("--completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("rdm"));
}

#[test]
fn explicit_missing_config_fails() {
    let temp = TempDir::new().unwrap();
    rdm()
        .arg("--config")
        .arg("nope.toml")
        .arg("--offline")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn invalid_config_names_the_problem() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("rdm.toml"),
        r#"
[taxonomy]
fiscal_years = ["FY30"]
cycles = ["S31"]

[[taxonomy.wbs]]
code = "10A.01"
title = "Everything"
"#,
    )
    .unwrap();
    rdm()
        .arg("--offline")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("S31"));
}
