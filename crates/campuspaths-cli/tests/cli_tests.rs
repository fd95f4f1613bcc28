//! Integration tests for the `campuspaths` binary against the shared fixtures.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

fn campuspaths() -> Command {
    let mut cmd = Command::cargo_bin("campuspaths").expect("binary exists");
    cmd.env_remove("CAMPUSPATHS_DATA_DIR")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(fixtures_dir());
    cmd
}

#[test]
fn buildings_lists_sorted_short_names() {
    campuspaths()
        .arg("buildings")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ABC: Alpha Building\nBCD: Beta Hall\nCDE: Gamma Center\n",
        ))
        .stdout(predicate::str::contains("ZZZ: Isolated Observatory"));
}

#[test]
fn route_prints_walking_directions() {
    campuspaths()
        .args(["route", "--from", "abc", "--to", "CDE"])
        .assert()
        .success()
        .stdout(predicate::eq(concat!(
            "Path from Alpha Building to Gamma Center:\n",
            "\tWalk 520 feet SouthEast to (300, 400)\n",
            "Total distance: 520 feet\n",
        )));
}

#[test]
fn route_to_unconnected_building_fails() {
    campuspaths()
        .args(["route", "--from", "ABC", "--to", "ZZZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no path found between ABC and ZZZ"));
}

#[test]
fn route_with_unknown_building_suggests_names() {
    campuspaths()
        .args(["route", "--from", "ABD", "--to", "BCD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown building: ABD"))
        .stderr(predicate::str::contains("ABC"));
}

#[test]
fn data_dir_can_come_from_environment() {
    Command::cargo_bin("campuspaths")
        .expect("binary exists")
        .env("CAMPUSPATHS_DATA_DIR", fixtures_dir())
        .arg("buildings")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEF: Delta Library"));
}

#[test]
fn missing_data_dir_reports_context() {
    let dir = TempDir::new().expect("create temp dir");
    Command::cargo_bin("campuspaths")
        .expect("binary exists")
        .env_remove("CAMPUSPATHS_DATA_DIR")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("buildings")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load campus data"));
}

#[test]
fn strict_flag_rejects_malformed_paths() {
    let dir = TempDir::new().expect("create temp dir");
    fs::copy(
        fixtures_dir().join("campus_buildings.csv"),
        dir.path().join("campus_buildings.csv"),
    )
    .expect("copy buildings");
    fs::write(
        dir.path().join("campus_paths.csv"),
        "x1,y1,x2,y2,distance\n0,0,300,0,-1\n",
    )
    .expect("write paths");

    Command::cargo_bin("campuspaths")
        .expect("binary exists")
        .env_remove("CAMPUSPATHS_DATA_DIR")
        .arg("--data-dir")
        .arg(dir.path())
        .args(["--strict", "buildings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid path record at line 2"));

    Command::cargo_bin("campuspaths")
        .expect("binary exists")
        .env_remove("CAMPUSPATHS_DATA_DIR")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("buildings")
        .assert()
        .success();
}

#[test]
fn script_file_produces_transcript() {
    campuspaths()
        .arg("script")
        .arg(fixtures_dir().join("graph_script.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# Triangle with a cheaper two-hop route\ncreated graph g\n",
        ))
        .stdout(predicate::str::contains(
            "the children of A in g are: B(1.000) C(5.000)\n",
        ))
        .stdout(predicate::str::ends_with(concat!(
            "path from A to C:\n",
            "A to B with weight 1.000\n",
            "B to C with weight 1.000\n",
            "total cost: 2.000\n",
        )));
}

#[test]
fn script_reads_stdin_without_file() {
    campuspaths()
        .arg("script")
        .write_stdin("CreateGraph g\nAddNode g x\nListNodes g\n")
        .assert()
        .success()
        .stdout(predicate::eq(
            "created graph g\nadded node x to g\ng contains: x\n",
        ));
}
