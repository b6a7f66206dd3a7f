//! Integration tests for report generation

use degree_audit::core::audit::evaluate;
use degree_audit::core::report::formats::markdown::REPORT_FILE_NAME;
use degree_audit::core::report::tables::{
    ERROR_GRADES_TABLE, GPA_TABLE, PENDING_RESULTS_TABLE, PREVIOUS_RESULTS_TABLE,
};
use degree_audit::core::report::{
    generator_for, MarkdownReporter, ReportContext, ReportFormat, ReportTables,
};
use degree_audit::core::transcript::load_transcript;
use degree_audit::core::Catalog;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn samples() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
}

fn audit_sample(name: &str) -> degree_audit::core::models::AuditOutcome {
    let catalog = Catalog::load(samples().join("catalog.toml")).expect("load catalog");
    let transcript =
        load_transcript(samples().join("transcripts").join(name)).expect("load transcript");
    evaluate(&catalog, &transcript)
}

#[test]
fn csv_report_for_eligible_student() {
    let outcome = audit_sample("eligible");
    let ctx = ReportContext::new("eligible", &outcome);
    let dir = TempDir::new().expect("Failed to create temp dir");

    let written = generator_for(ReportFormat::Csv)
        .generate(&ctx, dir.path())
        .expect("write csv report");
    assert_eq!(
        written,
        vec![
            dir.path().join("gpa_and_eligibility.csv"),
            dir.path().join("invalid_courses.csv"),
        ]
    );
    assert_eq!(
        fs::read_to_string(&written[1]).expect("read invalid courses"),
        "List,Course Code\n"
    );

    let content = fs::read_to_string(&written[0]).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "Year,GPA,Degree Eligibility,Reason,Class,Suspension Status"
    );
    assert_eq!(lines[1], "First Year,3.38,,,,");
    assert_eq!(
        lines[4],
        "Overall,3.42,Eligible,,Second Class (Upper Division),Not Suspended"
    );
}

#[test]
fn csv_report_writes_diagnostic_tables() {
    let outcome = audit_sample("repeats");
    let ctx = ReportContext::new("repeats", &outcome);
    let dir = TempDir::new().expect("Failed to create temp dir");

    generator_for(ReportFormat::Csv)
        .generate(&ctx, dir.path())
        .expect("write csv report");

    let previous =
        fs::read_to_string(dir.path().join("previous_results.csv")).expect("previous results");
    assert_eq!(
        previous,
        "Course Code,Course Name,Previous Grade,AcYear\nELEC 11014,Electric Circuits,B,3\n"
    );
    let pending =
        fs::read_to_string(dir.path().join("pending_results.csv")).expect("pending results");
    assert!(pending.contains("ELEC 31014,Control Systems,3"));
    assert!(dir
        .path()
        .join("incomplete_compulsory_courses.csv")
        .is_file());
    assert!(!dir.path().join("error_grades.csv").exists());
}

#[test]
fn overall_reason_joins_failures() {
    let outcome = audit_sample("suspended");
    let tables = ReportTables::assemble(&outcome);

    let gpa = tables.get(GPA_TABLE).expect("gpa table");
    let overall = &gpa.rows[3];
    assert_eq!(overall[2], "Not Eligible");
    assert!(overall[3].starts_with("Not all compulsory courses are completed., "));
    assert_eq!(overall[4], "Eligibility not met");
    assert_eq!(overall[5], "Suspended");

    assert!(tables.get(ERROR_GRADES_TABLE).is_some());
    assert!(tables.get(PREVIOUS_RESULTS_TABLE).is_none());
    assert!(tables.get(PENDING_RESULTS_TABLE).is_none());
}

#[test]
fn markdown_report_is_written() {
    let outcome = audit_sample("repeats");
    let ctx = ReportContext::new("repeats", &outcome);
    let dir = TempDir::new().expect("Failed to create temp dir");
    let out_dir = dir.path().join("nested").join("reports");

    let written = generator_for(ReportFormat::Markdown)
        .generate(&ctx, &out_dir)
        .expect("write markdown report");
    assert_eq!(written, vec![out_dir.join(REPORT_FILE_NAME)]);

    let content = fs::read_to_string(&written[0]).expect("read markdown");
    assert_eq!(content, MarkdownReporter::new().render(&ctx));
    assert!(content.contains("| Curriculum Path | Path 2 |"));
    assert!(content.contains("## Previous Results"));
    assert!(content.contains("| ELEC 11014 | Electric Circuits | B | 3 |"));
}
