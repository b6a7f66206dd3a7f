//! End-to-end audits of the sample transcripts and of edge-case transcripts

use degree_audit::core::audit::evaluate;
use degree_audit::core::models::{
    CourseRecord, CurriculumPath, DegreeClass, PendingResult, PreviousResult, SuspensionStatus,
    Transcript,
};
use degree_audit::core::transcript::load_transcript;
use degree_audit::core::Catalog;
use std::path::PathBuf;

fn samples() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
}

fn sample_catalog() -> Catalog {
    Catalog::load(samples().join("catalog.toml")).expect("load sample catalog")
}

fn sample_transcript(name: &str) -> Transcript {
    load_transcript(samples().join("transcripts").join(name)).expect("load sample transcript")
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn eligible_student_gets_second_upper() {
    let outcome = evaluate(&sample_catalog(), &sample_transcript("eligible"));
    let report = &outcome.report;

    assert_eq!(outcome.path, CurriculumPath::Path1);
    assert!(report.eligible, "unexpected reasons: {:?}", report.reasons);
    assert!(report.reasons.is_empty());
    assert!(approx(report.per_year[0].gpa, 3.38));
    assert!(approx(report.per_year[1].gpa, 3.5));
    assert!(approx(report.per_year[2].gpa, 3.38));
    assert_eq!(report.total_credits(), 96);
    assert!(approx(report.overall_gpa, 3.42));
    assert_eq!(report.degree_class, DegreeClass::SecondUpper);
    assert_eq!(report.suspension, SuspensionStatus::NotSuspended);

    assert_eq!(outcome.credits.elec, 28);
    assert_eq!(outcome.credits.phys, 28);
    assert_eq!(outcome.credits.a_or_better, 40);

    let diagnostics = &outcome.diagnostics;
    assert!(diagnostics.incomplete_compulsory.is_empty());
    assert!(diagnostics.invalid_grades.is_empty());
    assert!(diagnostics.previous_results.is_empty());
    assert!(diagnostics.pending_results.is_empty());
    assert!(diagnostics
        .invalid_course_codes
        .iter()
        .all(|list| list.codes.is_empty()));
}

#[test]
fn withheld_grade_suspends_student() {
    let outcome = evaluate(&sample_catalog(), &sample_transcript("suspended"));
    let report = &outcome.report;

    assert_eq!(report.suspension, SuspensionStatus::Suspended);
    assert!(!report.eligible);
    assert_eq!(report.degree_class, DegreeClass::EligibilityNotMet);

    // Withheld and unmapped grades never reach the GPA
    assert_eq!(report.per_year[0].total_credits, 8);
    assert!(approx(report.per_year[0].gpa, 1.5));
    assert_eq!(report.per_year[1].total_credits, 4);
    assert!(approx(report.per_year[2].gpa, 4.0));

    let diagnostics = &outcome.diagnostics;
    assert_eq!(
        diagnostics.invalid_grades.iter().collect::<Vec<_>>(),
        vec!["Q"]
    );
    assert!(diagnostics.previous_results.is_empty());
    assert!(diagnostics.pending_results.is_empty());
}

#[test]
fn repeated_attempts_and_pending_results() {
    let outcome = evaluate(&sample_catalog(), &sample_transcript("repeats"));
    let diagnostics = &outcome.diagnostics;

    assert_eq!(outcome.path, CurriculumPath::Path2);
    assert_eq!(diagnostics.incomplete_compulsory, vec!["PHYS 33014"]);

    // ELEC 11014 has three distinct grade points; PHYS 11014 (D, D, B) has two
    assert_eq!(
        diagnostics.previous_results,
        vec![PreviousResult {
            course_code: "ELEC 11014".to_string(),
            course_name: "Electric Circuits".to_string(),
            grade: Some("B".to_string()),
            academic_year: 3,
        }]
    );
    assert_eq!(
        diagnostics.pending_results,
        vec![PendingResult {
            course_code: "ELEC 31014".to_string(),
            course_name: "Control Systems".to_string(),
            academic_year: 3,
        }]
    );

    let report = &outcome.report;
    assert!(approx(report.per_year[0].gpa, 1.33));
    assert!(approx(report.per_year[1].gpa, 1.5));
    assert!(approx(report.per_year[2].gpa, 3.0));
    assert!(approx(report.overall_gpa, 1.86));
    assert_eq!(report.suspension, SuspensionStatus::NotSuspended);
}

/// 31 credits in `year` with a GPA of exactly 2.00, 24 credits at C or better,
/// and 8 ELEC and 8 PHYS credits
fn boundary_year(year: u32) -> Vec<CourseRecord> {
    let rows = [
        ("ELEC {}1014", "C"),
        ("ELEC {}2014", "D"),
        ("PHYS {}1014", "C"),
        ("PHYS {}2014", "B"),
        ("MATH {}1013", "C"),
        ("MATH {}2013", "C"),
        ("STAT {}1013", "C"),
        ("CHEM {}1013", "B"),
        ("CHEM {}2013", "D"),
    ];
    rows.iter()
        .map(|&(code, grade)| {
            let code = code.replace("{}", &year.to_string());
            CourseRecord::new(code, "Course", year, 1, Some(grade))
        })
        .collect()
}

#[test]
fn boundary_student_is_eligible_without_class() {
    let mut first = boundary_year(1);
    first.push(CourseRecord::new("ACLT 11012", "Academic Literacy I", 1, 1, Some("P")));
    first.push(CourseRecord::new("CMSK 14012", "Computing Skills", 1, 1, Some("P")));
    let transcript = Transcript::new(first, boundary_year(2), boundary_year(3));

    let outcome = evaluate(&sample_catalog(), &transcript);
    let report = &outcome.report;

    assert!(approx(report.overall_gpa, 2.0));
    assert_eq!(outcome.credits.c_or_better, 72);
    assert_eq!(outcome.credits.elec, 24);
    assert_eq!(outcome.credits.phys, 24);
    assert_eq!(report.total_credits(), 93);
    // Compulsory courses of the sample catalog are not on this transcript
    assert_eq!(
        report.reasons,
        vec!["Not all compulsory courses are completed.".to_string()]
    );

    let relaxed = Catalog::from_toml(
        r#"
gpa_ineligible = ["ACLT 11012", "CMSK 14012"]

[grade_points]
B = 3.0
C = 2.0
D = 1.0
"#,
    )
    .expect("parse catalog");
    let outcome = evaluate(&relaxed, &transcript);
    assert!(outcome.report.eligible, "{:?}", outcome.report.reasons);
    assert_eq!(outcome.report.degree_class, DegreeClass::NoClass);
}

#[test]
fn zero_credit_codes_give_zero_gpa() {
    let catalog = Catalog::new().with_grade_point("A", 4.0);
    let transcript = Transcript::new(
        vec![CourseRecord::new("ABCD EFGHI", "No Credits", 1, 1, Some("A"))],
        Vec::new(),
        Vec::new(),
    );

    let outcome = evaluate(&catalog, &transcript);
    assert_eq!(outcome.report.per_year[0].total_credits, 0);
    assert!(approx(outcome.report.per_year[0].gpa, 0.0));
    assert!(approx(outcome.report.overall_gpa, 0.0));
}

#[test]
fn audit_is_idempotent() {
    let catalog = sample_catalog();
    let transcript = sample_transcript("repeats");
    assert_eq!(evaluate(&catalog, &transcript), evaluate(&catalog, &transcript));
}
