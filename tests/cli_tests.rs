#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[allow(deprecated)]
fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.arg(fixture("course_records.txt"))
        .env_remove("WOLF_SCHEDULER_CONFIG")
        .env_remove("WOLF_SCHEDULER_STORE")
        .write_stdin(script.to_string())
        .assert()
}

#[test]
fn cli_adds_and_lists_course() {
    run_cli("add CSC 216 001\nschedule\nquit\n")
        .success()
        .stdout(str_contains("Added CSC 216 section 001."))
        .stdout(str_contains(
            "| CSC 216 | 001     | Software Development Fundamentals |",
        ));
}

#[test]
fn cli_rejects_second_section() {
    run_cli("add CSC 216 001\nadd CSC 216 002\nquit\n")
        .success()
        .stdout(str_contains("You are already enrolled in CSC 216"));
}

#[test]
fn cli_reports_unknown_offering_and_removal_miss() {
    run_cli("add MA 141 001\nremove CSC 216 001\nquit\n")
        .success()
        .stdout(str_contains("MA 141 section 001 is not in the catalog."))
        .stdout(str_contains("CSC 216 section 001 is not on the schedule."));
}

#[test]
fn cli_exports_schedule() {
    let tmp = NamedTempFile::new().expect("create temp file");
    let path = tmp.path().to_string_lossy().to_string();
    let script = format!("add CSC 216 601\nexport {path}\nquit\n");
    run_cli(&script)
        .success()
        .stdout(str_contains("Schedule exported to"));
    let contents = std::fs::read_to_string(tmp.path()).unwrap();
    assert_eq!(
        contents,
        "CSC 216,Software Development Fundamentals,601,3,jctetter,A\n"
    );
}

#[test]
#[allow(deprecated)]
fn cli_fails_without_catalog() {
    Command::cargo_bin("cli")
        .expect("cli binary")
        .arg(fixture("missing.txt"))
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(str_contains("Cannot find file."));
}
