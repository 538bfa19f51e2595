use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dayfacts() -> Command {
    Command::cargo_bin("dayfacts").expect("binary builds")
}

#[test]
fn no_command_prints_guidance() {
    dayfacts()
        .assert()
        .success()
        .stdout(predicate::str::contains("Get started"))
        .stdout(predicate::str::contains("dayfacts show"));
}

#[test]
fn help_lists_the_subcommands() {
    dayfacts()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("provider"));
}

#[test]
fn malformed_date_is_rejected_before_any_fetch() {
    dayfacts()
        .args(["show", "--date", "not-a-date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn impossible_calendar_date_is_rejected() {
    dayfacts()
        .args(["show", "--date", "2024-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn future_date_is_rejected() {
    dayfacts()
        .args(["show", "--date", "2999-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("in the future"));
}

#[test]
fn unknown_category_is_a_usage_error() {
    dayfacts()
        .args(["show", "--categories", "weather"])
        .assert()
        .failure();
}

#[test]
fn init_writes_config_into_the_data_dir() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().to_str().unwrap();

    dayfacts()
        .args(["--data-dir", data_dir, "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    assert!(temp.path().join("config.toml").exists());

    // Second run reports the existing file instead of overwriting.
    dayfacts()
        .args(["--data-dir", data_dir, "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn provider_list_names_all_sources() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().to_str().unwrap();

    dayfacts()
        .args(["--data-dir", data_dir, "provider", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wikipedia"))
        .stdout(predicate::str::contains("tmdb"))
        .stdout(predicate::str::contains("jikan"));
}
