use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::Command;

fn is_numbered_rs(entry: &fs::DirEntry) -> bool {
    let path = entry.path();
    path.is_file()
        && path.extension() == Some(OsStr::new("rs"))
        && path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|n| n.chars().next().is_some_and(|c| c.is_ascii_digit()))
}

#[test]
fn run_all_demos_with_mock() {
    let demos_dir = Path::new("examples");
    let entries = fs::read_dir(demos_dir).expect("read demos dir");
    let mut found_any = false;
    for entry in entries.flatten().filter(is_numbered_rs) {
        let path = entry.path();
        let name_owned = path
            .file_stem()
            .and_then(OsStr::to_str)
            .expect("demo name")
            .to_string();
        found_any = true;
        let mut cmd = Command::new("cargo");
        cmd.arg("run").arg("--example").arg(&name_owned);
        cmd.env_remove("GRIDCAST_DEMOS_KLINES");
        cmd.assert().success();
    }
    assert!(found_any, "no demos found to run");
}

#[test]
fn alignment_gap_demo_names_the_missing_hour() {
    let mut cmd = Command::new("cargo");
    cmd.arg("run").arg("--example").arg("04_alignment_gap");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("missing target time: 2023/03/15, 20:00:00"));
}
