//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("bookclub").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("bookclub").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--enforce-foreign-keys"));
}

#[test]
fn test_serve_rejects_conflicting_cors_flags() {
    let mut cmd = Command::cargo_bin("bookclub").unwrap();
    cmd.arg("serve").arg("--cors-permissive").arg("--cors-localhost");

    cmd.assert().failure();
}

#[test]
fn test_migrate_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("club.db");
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();

    let mut cmd = Command::cargo_bin("bookclub").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .arg("migrate")
        .arg("--database-url")
        .arg(format!("sqlite://{}", db.display()));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("schema at version 1"));
    assert!(db.exists());

    // second run is a no-op
    let mut cmd = Command::cargo_bin("bookclub").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .arg("migrate")
        .arg("--database-url")
        .arg(format!("sqlite://{}", db.display()));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Applied 0 migration(s)"));
}

#[test]
fn test_migrate_revert_then_reapply() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("club.db");
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();
    let url = format!("sqlite://{}", db.display());

    let migrate = |revert: bool| {
        let mut cmd = Command::cargo_bin("bookclub").unwrap();
        cmd.arg("--config").arg(&config).arg("migrate").arg("--database-url").arg(&url);
        if revert {
            cmd.arg("--revert");
        }
        cmd
    };

    migrate(false)
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied 1 migration(s); schema at version 1"));
    migrate(true)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reverted 1 migration(s); schema at version 0"));
    migrate(false)
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied 1 migration(s); schema at version 1"));
}

#[test]
fn test_missing_config_file_fails() {
    let mut cmd = Command::cargo_bin("bookclub").unwrap();
    cmd.arg("--config")
        .arg("/nonexistent/bookclub.toml")
        .arg("migrate");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}
