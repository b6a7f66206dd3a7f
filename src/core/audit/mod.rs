//! Rules engine: turns a transcript and a catalog into GPA, eligibility and diagnostics
//!
//! Every stage is a pure function over borrowed inputs. [`evaluate`] runs them
//! in order and packages the results.

pub mod compulsory;
pub mod eligibility;
pub mod gpa;
pub mod history;
pub mod normalizer;
pub mod path;
pub mod validator;

use crate::core::catalog::Catalog;
use crate::core::models::{
    AuditOutcome, Diagnostics, EligibilityReport, SuspensionStatus, Transcript, YearGpa,
};

/// Run a full audit of one student's transcript.
///
/// Never fails: malformed codes, unmapped grades and missing results end up in
/// the returned diagnostics.
#[must_use]
pub fn evaluate(catalog: &Catalog, transcript: &Transcript) -> AuditOutcome {
    let merged = normalizer::merge_years(transcript);
    logger::debug!(
        "Merged {} transcript rows into {} records",
        transcript.len(),
        merged.len()
    );

    let invalid_course_codes = validator::validate_catalog(catalog);
    let path = path::determine_path(&merged, catalog);
    logger::debug!("Curriculum path: {}", path);

    let compulsory = compulsory::check_compulsory(&merged, path, catalog);

    let per_year: [YearGpa; 3] = transcript
        .years()
        .map(|records| gpa::compute_gpa(records, catalog));
    let overall_gpa = gpa::overall_gpa(&per_year);

    let history = history::analyze(&merged, catalog);
    let credits = eligibility::summarize(&merged, &per_year, catalog);
    let reasons = eligibility::unmet_requirements(&credits, compulsory.complete, overall_gpa);
    let eligible = reasons.is_empty();
    let degree_class = eligibility::classify(&credits, overall_gpa, eligible);
    logger::debug!(
        "Overall GPA {:.2}, eligible: {}, class: {}",
        overall_gpa,
        eligible,
        degree_class
    );

    let suspension = if history.suspended {
        SuspensionStatus::Suspended
    } else {
        SuspensionStatus::NotSuspended
    };

    AuditOutcome {
        path,
        report: EligibilityReport {
            per_year,
            overall_gpa,
            eligible,
            reasons,
            degree_class,
            suspension,
        },
        credits,
        diagnostics: Diagnostics {
            invalid_course_codes,
            incomplete_compulsory: compulsory.missing,
            invalid_grades: history.invalid_grades,
            previous_results: history.previous_results,
            pending_results: history.pending_results,
        },
    }
}
