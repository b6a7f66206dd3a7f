//! Integration tests for reading transcript directories and catalog files

use degree_audit::core::models::CurriculumPath;
use degree_audit::core::transcript::{load_transcript, read_year_file};
use degree_audit::core::{AuditError, Catalog};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const HEADER: &str = "Course Code,Course Name,AcYear,Attempt,Grade\n";

fn samples() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
}

#[test]
fn sample_transcripts_load() {
    for name in ["eligible", "suspended", "repeats"] {
        let transcript = load_transcript(samples().join("transcripts").join(name))
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(!transcript.is_empty(), "{name} has no records");
    }
}

#[test]
fn blank_trailing_grade_is_pending() {
    let transcript =
        load_transcript(samples().join("transcripts").join("suspended")).expect("load transcript");
    let pending = transcript
        .third
        .iter()
        .find(|r| r.course_code == "ELEC 31014")
        .expect("ELEC 31014 row");
    assert!(pending.grade.is_none());
}

#[test]
fn missing_directory_reports_first_sheet() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = load_transcript(dir.path().join("nobody")).expect_err("no sheets");
    assert!(matches!(err, AuditError::MissingYear(ref path) if path.ends_with("first.csv")));
}

#[test]
fn unreadable_row_is_csv_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("first.csv");
    fs::write(&path, format!("{HEADER}ELEC 11014,Circuits,1\n")).expect("write sheet");

    let err = read_year_file(&path).expect_err("short row");
    assert!(matches!(err, AuditError::Csv { .. }), "got {err}");
}

#[test]
fn whitespace_around_cells_is_trimmed() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("second.csv");
    fs::write(
        &path,
        format!("{HEADER} ELEC 21014 , Signals , 2 , 1 , B+ \n"),
    )
    .expect("write sheet");

    let records = read_year_file(&path).expect("read sheet");
    assert_eq!(records[0].course_code, "ELEC 21014");
    assert_eq!(records[0].course_name, "Signals");
    assert_eq!(records[0].academic_year, 2);
    assert_eq!(records[0].grade.as_deref(), Some("B+"));
}

#[test]
fn sample_catalog_loads() {
    let catalog = Catalog::load(samples().join("catalog.toml")).expect("load catalog");

    assert_eq!(catalog.grade_point("B+"), Some(3.3));
    assert!(catalog.is_valid_grade("Withheld"));
    assert!(catalog.grade_point("Withheld").is_none());
    assert_eq!(catalog.path1_courses(), ["ELEC 33014"]);
    assert_eq!(catalog.compulsory_for(CurriculumPath::Path2).len(), 4);
    assert!(catalog.is_gpa_ineligible("CMSK 14042"));
}

#[test]
fn broken_catalog_names_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.toml");
    fs::write(&path, "valid_grades = \"A\"\n").expect("write catalog");

    let err = Catalog::load(&path).expect_err("wrong type");
    assert!(matches!(err, AuditError::Catalog { .. }));
    assert!(err.to_string().contains("catalog.toml"));
}

#[test]
fn missing_catalog_is_io_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = Catalog::load(dir.path().join("absent.toml")).expect_err("no file");
    assert!(matches!(err, AuditError::Io { .. }));
}
