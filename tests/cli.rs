use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".brent-dashboard").join("config.json")
}

const BINARY_NAME: &str = "brent-dashboard";

/// Nothing listens on the discard port, so every request fails fast.
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

fn dashboard(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()) // simulate different $HOME
        .env_remove("DASHBOARD_ENVIRONMENT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Usage:"))
        .stdout(contains("start"))
        .stdout(contains("config"));
}

#[test]
/// A headless run against an unreachable server still renders an empty dashboard.
fn headless_start_without_server_renders_empty_dashboard() {
    let tmp = temp_home_dir();
    dashboard(&tmp)
        .args(["start", "--headless", "--api-url", UNREACHABLE_API])
        .timeout(std::time::Duration::from_secs(60))
        .assert()
        .success()
        .stdout(contains("Detected change point: —"))
        .stdout(contains("Total price records:"))
        .stdout(contains("No events match your filters."));
}

#[test]
/// Invalid dates are rejected before anything is fetched.
fn start_rejects_invalid_date() {
    let tmp = temp_home_dir();
    dashboard(&tmp)
        .args(["start", "--headless", "--start-date", "N/A"])
        .assert()
        .failure()
        .stderr(contains("Unrecognized date"));
}

#[test]
/// `config set` writes the file and `config clear` removes it.
fn config_set_then_clear() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    dashboard(&tmp)
        .args([
            "config",
            "set",
            "--api-url",
            "http://data.example:8000/",
            "--start-date",
            "2015-01-01",
        ])
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"api_url\": \"http://data.example:8000\""));
    assert!(saved.contains("\"start_date\": \"2015-01-01\""));
    assert!(!saved.contains("end_date"));

    dashboard(&tmp)
        .args(["config", "clear"])
        .assert()
        .success()
        .stdout(contains("Configuration cleared"));
    assert!(!config_path.exists());
}

#[test]
/// `config set` without any value is an error and writes nothing.
fn config_set_requires_a_value() {
    let tmp = temp_home_dir();
    dashboard(&tmp).args(["config", "set"]).assert().failure();
    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Saved defaults feed the headless report.
fn headless_start_uses_saved_date_range() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(
        &config_path,
        format!(
            r#"{{"api_url": "{}", "start_date": "2016-01-01", "end_date": "2016-12-31"}}"#,
            UNREACHABLE_API
        ),
    )
    .unwrap();

    dashboard(&tmp)
        .args(["start", "--headless"])
        .timeout(std::time::Duration::from_secs(60))
        .assert()
        .success()
        .stdout(contains("Date range: 2016-01-01 to 2016-12-31"));
}
