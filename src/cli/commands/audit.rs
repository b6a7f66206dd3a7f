//! Audit command handler

use degree_audit::config::Config;
use degree_audit::core::{
    audit::evaluate,
    models::{AuditOutcome, StudyYear},
    report::{eligibility_label, generator_for, ReportContext, ReportFormat},
    transcript::load_transcript,
    Catalog,
};
use logger::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Arguments of one `audit` invocation
#[derive(Debug)]
pub struct AuditRequest<'a> {
    /// Directory holding `first.csv`, `second.csv` and `third.csv`
    pub transcript_dir: &'a Path,
    /// Catalog file from `--catalog`
    pub catalog: Option<&'a Path>,
    /// Output directory from `-o/--output`
    pub output: Option<&'a Path>,
    /// Report format name
    pub format: &'a str,
}

/// Run the audit command. Returns `false` when the audit could not be completed.
pub fn run(request: &AuditRequest, config: &Config) -> bool {
    match audit(request, config) {
        Ok(()) => true,
        Err(err) => {
            error!(
                "Audit failed for {}: {err}",
                request.transcript_dir.display()
            );
            eprintln!("{err}");
            false
        }
    }
}

fn audit(request: &AuditRequest, config: &Config) -> Result<(), String> {
    let format = ReportFormat::from_str(request.format).map_err(|e| format!("✗ {e}"))?;

    let catalog_path = catalog_path(request, config)?;
    let catalog = Catalog::load(&catalog_path).map_err(|e| format!("✗ {e}"))?;
    info!("Catalog loaded: {}", catalog_path.display());

    let transcript = load_transcript(request.transcript_dir).map_err(|e| format!("✗ {e}"))?;
    info!(
        "Transcript loaded: {} ({} records)",
        request.transcript_dir.display(),
        transcript.len()
    );

    let outcome = evaluate(&catalog, &transcript);
    let student = student_label(request.transcript_dir);
    print_summary(&student, &outcome);

    let output_dir = request.output.map_or_else(
        || PathBuf::from(&config.paths.reports_dir).join(&student),
        Path::to_path_buf,
    );
    let ctx = ReportContext::new(&student, &outcome);
    let written = generator_for(format)
        .generate(&ctx, &output_dir)
        .map_err(|e| format!("✗ Failed to write {format} report: {e}"))?;

    for path in &written {
        println!("✓ Report written: {}", path.display());
    }
    info!(
        "Wrote {} {format} file(s) to {}",
        written.len(),
        output_dir.display()
    );
    Ok(())
}

/// `--catalog` wins over the configured catalog path
fn catalog_path(request: &AuditRequest, config: &Config) -> Result<PathBuf, String> {
    if let Some(path) = request.catalog {
        return Ok(path.to_path_buf());
    }
    if config.catalog.path.is_empty() {
        return Err(
            "✗ No catalog given; pass --catalog FILE or run `degreeaudit config set catalog FILE`"
                .to_string(),
        );
    }
    Ok(PathBuf::from(&config.catalog.path))
}

fn student_label(transcript_dir: &Path) -> String {
    transcript_dir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("student")
        .to_string()
}

fn print_summary(student: &str, outcome: &AuditOutcome) {
    let report = &outcome.report;

    println!("\n=== Degree Audit for {student} ({}) ===", outcome.path);
    for (year, result) in StudyYear::ALL.iter().zip(report.per_year.iter()) {
        println!(
            "{year}: GPA {:.2} over {} credits",
            result.gpa, result.total_credits
        );
    }
    println!("Overall GPA: {:.2}", report.overall_gpa);
    println!("Degree Eligibility: {}", eligibility_label(report.eligible));
    for reason in &report.reasons {
        println!("  - {reason}");
    }
    println!("Class: {}", report.degree_class);
    println!("Suspension Status: {}", report.suspension);

    let diagnostics = &outcome.diagnostics;
    logger::verbose!(
        "Diagnostics: {} incomplete compulsory, {} invalid grades, {} previous results, {} pending results",
        diagnostics.incomplete_compulsory.len(),
        diagnostics.invalid_grades.len(),
        diagnostics.previous_results.len(),
        diagnostics.pending_results.len()
    );
}
