//! Tests for the `init` command and data directory handling.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_init_creates_database_and_config() {
    let env = TestEnv::new();

    env.command()
        .args(["init", "--with-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created database"))
        .stdout(predicate::str::contains("Created default configuration file"));

    assert!(env.data_dir.join("tablebook.db").exists());
    assert!(env.data_dir.join("config.yaml").exists());

    // The generated template must load cleanly
    env.command().arg("days").assert().success();
}

#[test]
fn test_init_twice_needs_overwrite() {
    let env = TestEnv::new();
    env.command().arg("init").assert().success();

    env.command()
        .arg("init")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("--overwrite"));

    env.command()
        .args(["init", "--overwrite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recreated database"));
}

#[test]
fn test_disable_autoinit_without_database() {
    let env = TestEnv::new();

    env.command()
        .args(["--disable-autoinit", "days"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Data directory not found"));

    assert!(!env.data_dir.join("tablebook.db").exists());
}

#[test]
fn test_autoinit_creates_database_on_first_use() {
    let env = TestEnv::new();
    env.command().args(["table", "list"]).assert().success();
    assert!(env.data_dir.join("tablebook.db").exists());
}

#[test]
fn test_invalid_config_file_exit_code() {
    let env = TestEnv::new();
    std::fs::create_dir_all(&env.data_dir).unwrap();
    std::fs::write(env.data_dir.join("config.yaml"), "booking:\n  max_guests: 20\n").unwrap();

    env.command()
        .arg("days")
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("max_guests"));
}
