//! CLI integration tests using the real vrstack binary
//!
//! Only read-only modes are exercised here: anything that reaches `install`
//! would shell out to package managers. HOME points at a temp directory so
//! file-based status checks see a clean system.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn vrstack_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vrstack").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn test_help_output() {
    let home = TempDir::new().unwrap();
    vrstack_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--minimal"))
        .stdout(predicate::str::contains("--full"))
        .stdout(predicate::str::contains("--list"))
        .stdout(predicate::str::contains("--uninstall"))
        .stdout(predicate::str::contains("--components"));
}

#[test]
fn test_version_output() {
    let home = TempDir::new().unwrap();
    vrstack_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vrstack"));
}

#[test]
fn test_list_shows_all_components_grouped() {
    let home = TempDir::new().unwrap();
    vrstack_cmd(&home)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Components"))
        .stdout(predicate::str::contains("xrlinuxdriver"))
        .stdout(predicate::str::contains("breezy-desktop"))
        .stdout(predicate::str::contains("monado"))
        .stdout(predicate::str::contains("opentrack"))
        .stdout(predicate::str::contains("stardust-xr"))
        .stdout(predicate::str::contains("vrto3d"))
        .stdout(predicate::str::contains("depth3d"))
        .stdout(predicate::str::contains("Gaming"));
}

#[test]
fn test_list_json_is_parseable() {
    let home = TempDir::new().unwrap();
    let output = vrstack_cmd(&home)
        .args(["--list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0]["name"], "xrlinuxdriver");
    assert_eq!(entries[0]["required"], true);
    assert!(entries[0]["status"].is_string());
}

#[test]
fn test_conflicting_mode_flags_rejected() {
    let home = TempDir::new().unwrap();
    vrstack_cmd(&home)
        .args(["--minimal", "--full"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_json_without_list_rejected() {
    let home = TempDir::new().unwrap();
    vrstack_cmd(&home).arg("--json").assert().failure();
}

#[test]
fn test_uninstall_on_clean_system_reports_done() {
    let home = TempDir::new().unwrap();
    vrstack_cmd(&home)
        .arg("--uninstall")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done!"));
}

#[test]
fn test_completions_generate() {
    let home = TempDir::new().unwrap();
    vrstack_cmd(&home)
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vrstack"));
}
