//! Integration tests for the autopager CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use crate::helpers::run_autopager;

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_autopager(&dir, &["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("demo"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("completions"));
}

#[test]
fn demo_help_documents_flags() {
    Command::cargo_bin("autopager")
        .unwrap()
        .args(["demo", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--duration"))
        .stdout(predicate::str::contains("--restart-on-scroll-end"))
        .stdout(predicate::str::contains("--no-cancel-on-scroll"));
}

#[test]
fn version_includes_package_version() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_autopager(&dir, &["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn invalid_duration_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_autopager(&dir, &["demo", "--duration", "forever"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("forever"));
}

#[test]
fn malformed_config_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[pager\n").unwrap();

    let (_stdout, stderr, exit_code) = run_autopager(&dir, &["config", "show"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid config"));
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn config_path_uses_override_dir() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_autopager(&dir, &["config", "path"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.trim().ends_with("config.toml"));
    assert!(stdout.contains(&dir.path().display().to_string()));
}

#[test]
fn config_show_prints_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_autopager(&dir, &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[autoscroll]"));
    assert!(stdout.contains("duration = \"short\""));
    assert!(stdout.contains("cancels_on_scroll = true"));
    assert!(stdout.contains("[pager]"));
}

#[test]
fn config_show_reflects_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[autoscroll]\nduration = \"long\"\n",
    )
    .unwrap();

    let (stdout, _stderr, exit_code) = run_autopager(&dir, &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("duration = \"long\""));
}

#[test]
fn config_init_writes_file_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let (stdout, _stderr, exit_code) = run_autopager(&dir, &["config", "init"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Wrote default config"));
    assert!(path.exists());

    let (_stdout, stderr, exit_code) = run_autopager(&dir, &["config", "init"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("already exists"));

    let (_stdout, _stderr, exit_code) = run_autopager(&dir, &["config", "init", "--force"]);
    assert_eq!(exit_code, 0);
}

#[test]
fn config_init_refusal_is_reported_on_stderr() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[pager]\npages = 3\n").unwrap();

    let (stdout, stderr, exit_code) = run_autopager(&dir, &["config", "init"]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    // NO_COLOR is set by the helper, so the message is plain text
    assert!(stderr.contains("Refusing to overwrite existing config"));
    assert!(!stderr.contains('\x1b'));
    let kept = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(kept.contains("pages = 3"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_autopager(&dir, &["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("autopager"));
}
