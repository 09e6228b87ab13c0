//! Integration tests for the CLI interface
//!
//! Everything here stays local: dry runs and validation failures never
//! contact a Framadate server.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A datepoll command isolated from the user's config and environment
fn datepoll(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("datepoll").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("DATEPOLL_PROVIDER_URL")
        .env_remove("DATEPOLL_NAME")
        .env_remove("DATEPOLL_EMAIL")
        .env_remove("DATEPOLL_LOCALE")
        .env_remove("DATEPOLL_TIMEOUT_SECS");
    cmd
}

fn create(home: &TempDir) -> Command {
    let mut cmd = datepoll(home);
    cmd.arg("create")
        .args(["--name", "Ann"])
        .args(["--title", "Climbing"])
        .args(["--email", "ann@example.org"]);
    cmd
}

#[test]
fn test_cli_help_flag() {
    let home = TempDir::new().unwrap();
    datepoll(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_create_help() {
    let home = TempDir::new().unwrap();
    datepoll(&home)
        .args(["create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--framadate"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_invalid_command() {
    let home = TempDir::new().unwrap();
    datepoll(&home)
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_missing_name_is_reported() {
    let home = TempDir::new().unwrap();
    datepoll(&home)
        .args(["create", "--title", "Climbing", "--email", "ann@example.org"])
        .args(["--dry-run", "mo", "18"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("You must specify a name."));
}

#[test]
fn test_dry_run_prints_expanded_times() {
    let home = TempDir::new().unwrap();
    create(&home)
        .args(["--dry-run", "2024-05-01,2024-05-03", "9,14:30"])
        .assert()
        .success()
        .stdout(
            "2024-05-01 09:00:00\n2024-05-01 14:30:00\n2024-05-03 09:00:00\n2024-05-03 14:30:00\n",
        );
}

#[test]
fn test_dry_run_explicit_date_range_excludes_end() {
    let home = TempDir::new().unwrap();
    create(&home)
        .args(["--dry-run", "2024-02-28-2024-03-01", "18"])
        .assert()
        .success()
        .stdout("2024-02-28 18:00:00\n2024-02-29 18:00:00\n");
}

#[test]
fn test_dry_run_weekday_range_yields_one_line_per_day() {
    let home = TempDir::new().unwrap();
    let output = create(&home)
        .args(["--dry-run", "mo-fr", "18"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.lines().all(|line| line.ends_with("18:00:00")));
}

#[test]
fn test_invalid_day_expression_fails() {
    let home = TempDir::new().unwrap();
    create(&home)
        .args(["--dry-run", "someday", "18"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("someday"));
}

#[test]
fn test_missing_provider_fails_before_any_request() {
    let home = TempDir::new().unwrap();
    create(&home)
        .args(["mo", "18"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("You need to specify a provider."));
}

#[test]
fn test_invalid_provider_url_fails() {
    let home = TempDir::new().unwrap();
    create(&home)
        .args(["--framadate", "ftp://polls.test", "mo", "18"])
        .assert()
        .failure()
        .code(5);
}

#[test]
fn test_config_file_supplies_defaults() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("datepoll.toml");
    std::fs::write(
        &config,
        "name = \"Ann\"\nemail = \"ann@example.org\"\nlocale = \"de\"\n",
    )
    .unwrap();

    datepoll(&home)
        .arg("--config")
        .arg(&config)
        .args(["create", "--title", "Klettern", "--dry-run", "2024-05-01", "19"])
        .assert()
        .success()
        .stdout("2024-05-01 19:00:00\n");
}

#[test]
fn test_missing_config_file_fails() {
    let home = TempDir::new().unwrap();
    create(&home)
        .arg("--config")
        .arg(home.path().join("nope.toml"))
        .args(["--dry-run", "mo", "18"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_env_supplies_name() {
    let home = TempDir::new().unwrap();
    datepoll(&home)
        .env("DATEPOLL_NAME", "Ann")
        .env("DATEPOLL_EMAIL", "ann@example.org")
        .args(["create", "--title", "Climbing", "--dry-run", "2024-05-01", "7"])
        .assert()
        .success()
        .stdout("2024-05-01 07:00:00\n");
}
