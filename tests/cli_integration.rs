#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn qcd(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("qcd").unwrap();
    cmd.env_remove("QCD_FILE")
        .env_remove("QCD_LOG")
        .arg("-f")
        .arg(store);
    cmd
}

#[test]
fn full_workflow_from_empty_store() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join(".qcddb");

    // No store file yet
    qcd(&store)
        .args(["get", "x"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Database is empty!"));

    qcd(&store).args(["add", "x", "/tmp"]).assert().success();
    qcd(&store)
        .args(["get", "x"])
        .assert()
        .success()
        .stdout("/tmp\n");

    // Anonymous key
    qcd(&store).args(["add", "/tmp/only-path"]).assert().success();
    qcd(&store)
        .args(["get", "1"])
        .assert()
        .success()
        .stdout("/tmp/only-path\n");

    qcd(&store).args(["change", "x", "/var"]).assert().success();
    qcd(&store).args(["get", "x"]).assert().stdout("/var\n");

    qcd(&store).args(["move", "x", "y"]).assert().success();
    qcd(&store).args(["get", "y"]).assert().stdout("/var\n");
    qcd(&store)
        .args(["get", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));

    qcd(&store).args(["delete", "y"]).assert().success();
    qcd(&store).args(["delete", "1"]).assert().success();
    qcd(&store)
        .arg("list")
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn get_on_existing_empty_store_reports_missing_label() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join(".qcddb");

    qcd(&store).args(["add", "z", "/z"]).assert().success();
    qcd(&store).args(["delete", "z"]).assert().success();
    qcd(&store)
        .args(["get", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("x does not exist in the database."));
}

#[test]
fn list_is_sorted_and_goes_to_stderr() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join(".qcddb");

    qcd(&store).args(["a", "zeta", "/z"]).assert().success();
    qcd(&store).args(["a", "alpha", "/a"]).assert().success();
    qcd(&store).args(["a", "mid", "/m"]).assert().success();

    qcd(&store)
        .arg("l")
        .assert()
        .success()
        .stdout("")
        .stderr("alpha  /a\nmid    /m\nzeta   /z\n");
}

#[test]
fn move_onto_existing_label_is_a_conflict() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join(".qcddb");

    qcd(&store).args(["add", "a", "/a"]).assert().success();
    qcd(&store).args(["add", "b", "/b"]).assert().success();

    qcd(&store)
        .args(["move", "a", "b"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("b already exists"));

    qcd(&store).args(["get", "a"]).assert().stdout("/a\n");
    qcd(&store).args(["get", "b"]).assert().stdout("/b\n");
}

#[test]
fn save_stores_working_directory() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join(".qcddb");
    let workdir = temp.path().join("work");
    fs::create_dir(&workdir).unwrap();
    let expected = workdir.canonicalize().unwrap();

    qcd(&store)
        .current_dir(&workdir)
        .arg("save")
        .assert()
        .success();
    qcd(&store)
        .current_dir(&workdir)
        .args(["save", "here"])
        .assert()
        .success();

    let first = qcd(&store).args(["get", "1"]).output().unwrap();
    let here = qcd(&store).args(["get", "here"]).output().unwrap();
    let first = String::from_utf8(first.stdout).unwrap();
    let here = String::from_utf8(here.stdout).unwrap();

    assert_eq!(Path::new(first.trim_end()).canonicalize().unwrap(), expected);
    assert_eq!(first, here);
}

#[test]
fn wrong_arity_exits_with_two_and_touches_nothing() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join(".qcddb");

    qcd(&store)
        .args(["add"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("usage: qcd add [LABEL] PATH"));
    qcd(&store)
        .args(["change", "only-one"])
        .assert()
        .code(2);
    qcd(&store).args(["list", "extra"]).assert().code(2);

    assert!(!store.exists());
}

#[test]
fn unknown_command_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    qcd(&temp.path().join(".qcddb"))
        .arg("frobnicate")
        .assert()
        .code(2);
}

#[test]
fn change_and_delete_of_missing_label_fail() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join(".qcddb");
    qcd(&store).args(["add", "a", "/a"]).assert().success();

    qcd(&store)
        .args(["change", "nope", "/x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope does not exist"));
    qcd(&store)
        .args(["delete", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope does not exist"));
}

#[test]
fn help_lists_commands_on_stderr() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join(".qcddb");
    qcd(&store)
        .arg("help")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Rename an entry in the database"));
    qcd(&store).assert().success().stderr(predicate::str::contains("Commands:"));
    assert!(!store.exists());
}

#[test]
fn reuses_store_with_db_suffix() {
    let temp = TempDir::new().unwrap();
    let configured = temp.path().join(".qcddb");
    let suffixed = temp.path().join(".qcddb.db");

    qcd(&suffixed).args(["add", "x", "/tmp"]).assert().success();
    qcd(&configured)
        .args(["get", "x"])
        .assert()
        .success()
        .stdout("/tmp\n");
    assert!(!configured.exists());
}

#[test]
fn store_file_can_come_from_environment() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("envdb");

    let mut cmd = Command::cargo_bin("qcd").unwrap();
    cmd.env("QCD_FILE", &store)
        .args(["add", "e", "/env"])
        .assert()
        .success();
    assert!(store.is_file());

    qcd(&store).args(["get", "e"]).assert().stdout("/env\n");
}

#[test]
fn file_flag_beats_environment() {
    let temp = TempDir::new().unwrap();
    let env_store = temp.path().join("envdb");
    let flag_store = temp.path().join("flagdb");

    let mut cmd = Command::cargo_bin("qcd").unwrap();
    cmd.env("QCD_FILE", &env_store)
        .arg("-f")
        .arg(&flag_store)
        .args(["add", "f", "/flag"])
        .assert()
        .success();
    assert!(flag_store.is_file());
    assert!(!env_store.exists());
}

#[test]
fn empty_environment_value_falls_back_to_home_store() {
    let home = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("qcd").unwrap();
    cmd.env("QCD_FILE", "")
        .env("HOME", home.path())
        .env_remove("QCD_LOG")
        .args(["add", "h", "/home-store"])
        .assert()
        .success();
    assert!(home.path().join(".qcddb").is_file());
}

#[test]
fn foreign_store_format_is_refused() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join(".qcddb");
    fs::write(&store, b"SQLite format 3\0garbage").unwrap();

    qcd(&store)
        .args(["add", "x", "/tmp"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sqlite"));
    assert!(fs::read(&store).unwrap().starts_with(b"SQLite format 3"));
}
