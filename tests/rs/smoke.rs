//! Smoke tests that run the `degreeaudit` binary end to end.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn samples() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
}

/// Run the CLI with its config directory redirected into `home`
fn run_cli(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_degreeaudit"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("APPDATA", home)
        .output()
        .expect("Failed to run degreeaudit")
}

#[test]
fn version_flag() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let output = run_cli(home.path(), &["--version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn audit_writes_csv_report() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let out_dir = home.path().join("out");
    let transcript = samples().join("transcripts").join("eligible");
    let catalog = samples().join("catalog.toml");

    let output = run_cli(
        home.path(),
        &[
            "audit",
            transcript.to_str().expect("utf8 path"),
            "--catalog",
            catalog.to_str().expect("utf8 path"),
            "-o",
            out_dir.to_str().expect("utf8 path"),
        ],
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("Overall GPA: 3.42"));
    assert!(stdout.contains("Class: Second Class (Upper Division)"));
    assert!(out_dir.join("gpa_and_eligibility.csv").is_file());
}

#[test]
fn audit_markdown_into_configured_reports_dir() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let reports = home.path().join("reports");
    let transcript = samples().join("transcripts").join("suspended");
    let catalog = samples().join("catalog.toml");

    let output = run_cli(
        home.path(),
        &[
            "--reports-dir",
            reports.to_str().expect("utf8 path"),
            "audit",
            transcript.to_str().expect("utf8 path"),
            "--catalog",
            catalog.to_str().expect("utf8 path"),
            "--format",
            "md",
        ],
    );

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Suspension Status: Suspended"));
    assert!(reports.join("suspended").join("audit_report.md").is_file());
}

#[test]
fn audit_missing_sheet_fails() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let catalog = samples().join("catalog.toml");

    let output = run_cli(
        home.path(),
        &[
            "audit",
            home.path().to_str().expect("utf8 path"),
            "--catalog",
            catalog.to_str().expect("utf8 path"),
        ],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing transcript sheet"));
}

#[test]
fn audit_rejects_unknown_format() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let transcript = samples().join("transcripts").join("eligible");

    let output = run_cli(
        home.path(),
        &[
            "audit",
            transcript.to_str().expect("utf8 path"),
            "--format",
            "xlsx",
        ],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown report format: xlsx"));
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().expect("Failed to create temp dir");

    let set = run_cli(home.path(), &["config", "set", "catalog", "/srv/catalog.toml"]);
    assert!(set.status.success());

    let get = run_cli(home.path(), &["config", "get", "catalog"]);
    assert_eq!(String::from_utf8_lossy(&get.stdout).trim(), "/srv/catalog.toml");
}
