//! End-to-end tests for the readgen binary.
//!
//! Every run uses `--yes` unless the test is specifically about prompting,
//! since the test harness provides no terminal. Fixtures deliberately use
//! non-GitHub repository URLs so no run ever reaches the GitHub API.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn readgen() -> Command {
    let mut cmd = Command::cargo_bin("readgen").unwrap();
    cmd.env("READGEN_NO_PROGRESS", "1");
    cmd
}

fn write_manifest(dir: &TempDir) {
    fs::write(
        dir.path().join("package.json"),
        r#"{
            "name": "demo-project",
            "version": "2.1.0",
            "description": "A fixture project for readgen tests.",
            "author": "Mark Fomin",
            "license": "MIT",
            "repository": "https://gitlab.com/fixtures/demo-project.git",
            "scripts": {"test": "jest"}
        }"#,
    )
    .unwrap();
}

#[test]
fn generates_a_readme_from_manifest_defaults() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir);
    fs::write(dir.path().join("yarn.lock"), "").unwrap();

    readgen()
        .current_dir(dir.path())
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("README generated"));

    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("Welcome to demo-project"));
    assert!(readme.contains("> A fixture project for readgen tests."));
    assert!(readme.contains("version-2.1.0"));
    assert!(readme.contains("Mark Fomin"));
    assert!(readme.contains("https://opensource.org/licenses/MIT"));
    // yarn.lock drives the suggested commands
    assert!(readme.contains("yarn install"));
    assert!(readme.contains("yarn run test"));
    // Non-GitHub repository: no documentation badge, but an issues link
    assert!(!readme.contains("#readme"));
    assert!(readme.contains("https://gitlab.com/fixtures/demo-project/issues"));
}

#[test]
fn runs_in_an_empty_directory_without_failing() {
    let dir = TempDir::new().unwrap();

    readgen().current_dir(dir.path()).arg("--yes").assert().success();

    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("Welcome to"));
    assert!(readme.contains("## Show your support"));
    // No manifest means no install/test suggestions
    assert!(!readme.contains("## Install"));
}

#[test]
fn yes_mode_overwrites_an_existing_readme() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir);
    fs::write(dir.path().join("README.md"), "old content").unwrap();

    readgen().current_dir(dir.path()).arg("--yes").assert().success();

    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(!readme.contains("old content"));
    assert!(readme.contains("Welcome to demo-project"));
}

#[test]
fn renders_a_custom_template() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir);
    fs::write(dir.path().join("custom.md"), "# {{ project_name }} v{{ project_version }}")
        .unwrap();

    readgen()
        .current_dir(dir.path())
        .args(["--yes", "--template", "custom.md"])
        .assert()
        .success();

    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert_eq!(readme, "# demo-project v2.1.0");
}

#[test]
fn missing_custom_template_is_a_clear_error() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir);

    readgen()
        .current_dir(dir.path())
        .args(["--yes", "--template", "does-not-exist.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("template file not found"));
}

#[test]
fn honors_a_custom_output_path() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir);

    readgen()
        .current_dir(dir.path())
        .args(["--yes", "--output", "docs.md"])
        .assert()
        .success();

    assert!(dir.path().join("docs.md").exists());
    assert!(!dir.path().join("README.md").exists());
}

#[test]
fn interactive_mode_without_a_terminal_fails_with_guidance() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir);

    readgen()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("stdin is not a terminal"))
        .stderr(predicate::str::contains("--yes"));
}
