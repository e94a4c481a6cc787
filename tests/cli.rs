//! End-to-end run of the demo binary.

use assert_cmd::Command;
use larmor::engine::{FileMode, KeyedFile};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn demo_writes_both_containers() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("larmor")
        .unwrap()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("saved successfully"));

    let hists = KeyedFile::open(dir.path().join("hist.json"), FileMode::Read).unwrap();
    let h1 = hists.get("h1").unwrap().as_hist().unwrap();
    assert_eq!(h1.x_axis().bins, 50);
    assert_eq!(h1.entries(), 100.0);

    let graphs = KeyedFile::open(dir.path().join("graph.json"), FileMode::Read).unwrap();
    let graph = graphs.get("Graph").unwrap().as_plot().unwrap();
    assert_eq!(graph.point_count(), 5);
    assert_eq!(graph.title(), "Linear Graph");
}

#[test]
fn demo_fails_on_unwritable_output() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist");

    Command::cargo_bin("larmor")
        .unwrap()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
