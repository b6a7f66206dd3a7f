//! Degree eligibility and honors classification

use crate::core::catalog::Catalog;
use crate::core::models::{CourseRecord, CreditSummary, DegreeClass, YearGpa};

/// ACLT courses; taking any one satisfies the ACLT requirement
pub const ACLT_COURSES: [&str; 3] = ["ACLT 11012", "ACLT 12022", "ACLT 21032"];

/// CMSK courses; taking any one satisfies the CMSK requirement
pub const CMSK_COURSES: [&str; 4] = ["CMSK 14012", "CMSK 14022", "CMSK 14032", "CMSK 14042"];

/// Minimum grade point for an A
pub const A_POINT: f64 = 4.0;
/// Minimum grade point for a B
pub const B_POINT: f64 = 3.0;
/// Minimum grade point for a C
pub const C_POINT: f64 = 2.0;
/// Minimum grade point for a D
pub const D_POINT: f64 = 1.0;

const REASON_COMPULSORY: &str = "Not all compulsory courses are completed.";
const REASON_ACLT: &str = "ACLT course requirement is not fulfilled.";
const REASON_CMSK: &str = "CMSK course requirement is not fulfilled.";
const REASON_FIRST_YEAR: &str = "Total credits for the first year is not greater than 30.";
const REASON_SECOND_YEAR: &str = "Total credits for the second year is not greater than 30.";
const REASON_FIRST_SECOND: &str =
    "Total credits for the first and second years is not greater than 60.";
const REASON_THIRD_YEAR: &str = "Total credits for the third year is not greater than 30.";
const REASON_TOTAL: &str = "Total credits for all three years is not greater than 90.";
const REASON_GPA: &str = "Overall GPA is not greater than 2.00.";
const REASON_ELEC: &str = "Total ELEC credits are not greater than or equal to 24.";
const REASON_PHYS: &str = "Total PHYS credits are not greater than or equal to 24.";
const REASON_ELEC_PHYS: &str = "Total ELEC and PHYS credits are not greater than or equal to 48.";
const REASON_C_OR_BETTER: &str = "Less than 72 credits with grade C or better.";
const REASON_D_OR_BETTER: &str = "Less than 90 credits with grade D or better.";

/// Build the credit aggregates from the merged records and yearly GPA results.
///
/// Yearly credits come from the GPA computation (best attempts only); the
/// subject and grade-band credits sum every matching merged record.
#[must_use]
pub fn summarize(
    records: &[CourseRecord],
    per_year: &[YearGpa; 3],
    catalog: &Catalog,
) -> CreditSummary {
    let taken = |codes: &[&str]| {
        records
            .iter()
            .any(|r| codes.contains(&r.course_code.as_str()))
    };
    let graded_prefix_credits = |prefix: &str| -> u32 {
        records
            .iter()
            .filter(|r| r.grade_token().is_some() && r.course_code.starts_with(prefix))
            .map(CourseRecord::credits)
            .sum()
    };
    let credits_at_or_above = |threshold: f64| -> u32 {
        records
            .iter()
            .filter(|r| {
                r.grade_token()
                    .and_then(|g| catalog.grade_point(g))
                    .is_some_and(|point| point >= threshold)
            })
            .map(CourseRecord::credits)
            .sum()
    };

    CreditSummary {
        first_year: per_year[0].total_credits,
        second_year: per_year[1].total_credits,
        third_year: per_year[2].total_credits,
        elec: graded_prefix_credits("ELEC"),
        phys: graded_prefix_credits("PHYS"),
        a_or_better: credits_at_or_above(A_POINT),
        b_or_better: credits_at_or_above(B_POINT),
        c_or_better: credits_at_or_above(C_POINT),
        d_or_better: credits_at_or_above(D_POINT),
        aclt_completed: taken(&ACLT_COURSES),
        cmsk_completed: taken(&CMSK_COURSES),
    }
}

/// Reasons the student is not eligible, in fixed order. Empty means eligible.
#[must_use]
pub fn unmet_requirements(
    credits: &CreditSummary,
    compulsory_complete: bool,
    overall_gpa: f64,
) -> Vec<String> {
    let requirements = [
        (compulsory_complete, REASON_COMPULSORY),
        (credits.aclt_completed, REASON_ACLT),
        (credits.cmsk_completed, REASON_CMSK),
        (credits.first_year > 30, REASON_FIRST_YEAR),
        (credits.second_year > 30, REASON_SECOND_YEAR),
        (credits.first_year + credits.second_year > 60, REASON_FIRST_SECOND),
        (credits.third_year > 30, REASON_THIRD_YEAR),
        (credits.total() > 90, REASON_TOTAL),
        (overall_gpa >= 2.00, REASON_GPA),
        (credits.elec >= 24, REASON_ELEC),
        (credits.phys >= 24, REASON_PHYS),
        (credits.elec + credits.phys >= 48, REASON_ELEC_PHYS),
        (credits.c_or_better >= 72, REASON_C_OR_BETTER),
        (credits.d_or_better >= 90, REASON_D_OR_BETTER),
    ];

    requirements
        .into_iter()
        .filter(|(met, _)| !met)
        .map(|(_, reason)| reason.to_string())
        .collect()
}

/// Honors class for an eligible student; first matching class wins
#[must_use]
pub fn classify(credits: &CreditSummary, overall_gpa: f64, eligible: bool) -> DegreeClass {
    if !eligible {
        return DegreeClass::EligibilityNotMet;
    }

    let half_total = f64::from(credits.total()) / 2.0;
    let second_class_credits = credits.c_or_better >= 80
        && credits.d_or_better >= credits.total()
        && f64::from(credits.b_or_better) >= half_total;

    if credits.c_or_better >= 90
        && f64::from(credits.a_or_better) >= half_total
        && overall_gpa >= 3.70
    {
        DegreeClass::First
    } else if second_class_credits && overall_gpa >= 3.30 {
        DegreeClass::SecondUpper
    } else if second_class_credits && overall_gpa >= 3.00 {
        DegreeClass::SecondLower
    } else {
        DegreeClass::NoClass
    }
}
