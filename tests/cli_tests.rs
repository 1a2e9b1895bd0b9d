//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PARALLEL: &str = "V1 1 0 10V\nR1 1 2 100\nR2 1 2 200\nR3 2 0 300\n";

fn netsketch() -> Command {
    cargo_bin_cmd!("netsketch")
}

fn write_netlist(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_cli_help() {
    netsketch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("netlist"));
}

#[test]
fn test_cli_version() {
    netsketch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_draw_human() {
    let dir = TempDir::new().unwrap();
    let file = write_netlist(&dir, "parallel.cir", PARALLEL);

    netsketch()
        .arg("draw")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Source: V1"))
        .stdout(predicate::str::contains("[R1 || R2] 1 -> 2"))
        .stdout(predicate::str::contains("[R3] 2 -> 0"));
}

#[test]
fn test_cli_draw_json() {
    let dir = TempDir::new().unwrap();
    let file = write_netlist(&dir, "parallel.cir", PARALLEL);

    let output = netsketch()
        .arg("draw")
        .arg(&file)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["source"], "V1");
    assert_eq!(value["path"]["groups"].as_array().unwrap().len(), 2);
    assert_eq!(value["layout"]["rows"], 1);
}

#[test]
fn test_cli_draw_from_stdin() {
    netsketch()
        .arg("draw")
        .arg("-")
        .write_stdin("V1 1 0 5V\nR1 1 2 10\nQ1 2 3 0 2N2222\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Q1] 2 -> 0"));
}

#[test]
fn test_cli_draw_writes_svg() {
    let dir = TempDir::new().unwrap();
    let file = write_netlist(&dir, "parallel.cir", PARALLEL);
    let svg = dir.path().join("out.svg");

    netsketch()
        .arg("draw")
        .arg(&file)
        .arg("--svg")
        .arg(&svg)
        .assert()
        .success()
        .stdout(predicate::str::contains("SVG written to"));

    let content = fs::read_to_string(&svg).unwrap();
    assert!(content.contains("<svg"));
    assert!(content.contains(">R2</tspan>"));
}

#[test]
fn test_cli_draw_without_source_fails() {
    netsketch()
        .arg("draw")
        .arg("-")
        .write_stdin("R1 1 2 100\nR2 2 0 100\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No voltage source"));
}

#[test]
fn test_cli_draw_missing_file() {
    let dir = TempDir::new().unwrap();

    netsketch()
        .arg("draw")
        .arg(dir.path().join("missing.cir"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read netlist file"));
}

#[test]
fn test_cli_check_reports_short() {
    netsketch()
        .arg("check")
        .arg("-")
        .write_stdin("V1 1 0 5V\nR1 2 2 1k\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("short circuit"));
}

#[test]
fn test_cli_check_clean_netlist() {
    netsketch()
        .arg("check")
        .arg("-")
        .write_stdin(PARALLEL)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 component(s)"))
        .stdout(predicate::str::contains("No errors found"));
}

#[test]
fn test_cli_examples_list() {
    netsketch()
        .arg("examples")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parallel resistors"))
        .stdout(predicate::str::contains("555 timer"));
}

#[test]
fn test_cli_examples_draw() {
    netsketch()
        .arg("examples")
        .arg("3")
        .assert()
        .success()
        .stdout(predicate::str::contains("[R1 || R2] 1 -> 2"));
}

#[test]
fn test_cli_examples_blocked_by_validation() {
    netsketch()
        .arg("examples")
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrealistic resistance"));
}

#[test]
fn test_cli_examples_unknown_id() {
    netsketch()
        .arg("examples")
        .arg("42")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown example"));
}

#[test]
fn test_cli_save_list_load() {
    let dir = TempDir::new().unwrap();
    let file = write_netlist(&dir, "parallel.cir", PARALLEL);

    netsketch()
        .arg("save")
        .arg(&file)
        .arg("--description")
        .arg("three resistors")
        .arg("--dir")
        .arg(dir.path())
        .arg("--name")
        .arg("circuit_parallel.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("circuit_parallel.json"));

    netsketch()
        .arg("list")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("circuit_parallel.json"))
        .stdout(predicate::str::contains("three resistors"));

    netsketch()
        .arg("load")
        .arg(dir.path().join("circuit_parallel"))
        .assert()
        .success()
        .stdout(predicate::str::contains("three resistors"))
        .stdout(predicate::str::contains("[R1 || R2] 1 -> 2"));
}

#[test]
fn test_cli_list_empty_dir() {
    let dir = TempDir::new().unwrap();

    netsketch()
        .arg("list")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved circuits"));
}
