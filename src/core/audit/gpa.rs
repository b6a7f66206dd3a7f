//! Attempt resolution and credit-weighted GPA
//!
//! Each course code counts once per GPA computation: the attempt with the
//! highest grade point, ties going to the earliest academic year and then to
//! the earliest row.

use crate::core::catalog::Catalog;
use crate::core::models::{credits_for, normalize_code, CourseRecord, YearGpa};

/// Round to 2 decimal places, exact halves going to the even digit
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// A course attempt that counts toward GPA
#[derive(Debug, Clone, PartialEq)]
pub struct CountedCourse {
    /// Normalized course code
    pub course_code: String,
    /// Credits derived from the code
    pub credits: u32,
    /// Mapped grade point
    pub grade_point: f64,
    /// Academic year of the attempt
    pub academic_year: u32,
}

impl CountedCourse {
    /// Credits multiplied by grade point
    #[must_use]
    pub fn credit_points(&self) -> f64 {
        f64::from(self.credits) * self.grade_point
    }
}

/// Filter GPA-eligible graded attempts and keep the best attempt per course code.
///
/// Records are dropped when the course is GPA-ineligible, the grade is missing,
/// or the grade has no grade point. Output is ordered by course code.
#[must_use]
pub fn resolve_attempts(records: &[CourseRecord], catalog: &Catalog) -> Vec<CountedCourse> {
    let mut counted: Vec<CountedCourse> = records
        .iter()
        .filter_map(|record| {
            let course_code = normalize_code(&record.course_code);
            if catalog.is_gpa_ineligible(&course_code) {
                return None;
            }
            let grade_point = catalog.grade_point(record.grade_token()?)?;
            Some(CountedCourse {
                credits: credits_for(&course_code),
                course_code,
                grade_point,
                academic_year: record.academic_year,
            })
        })
        .collect();

    // Stable sort: equal keys stay in input order.
    counted.sort_by(|a, b| {
        a.course_code
            .cmp(&b.course_code)
            .then_with(|| b.grade_point.total_cmp(&a.grade_point))
            .then_with(|| a.academic_year.cmp(&b.academic_year))
    });
    counted.dedup_by(|later, kept| later.course_code == kept.course_code);

    logger::debug!(
        "Resolved {} records to {} counted courses",
        records.len(),
        counted.len()
    );
    counted
}

/// GPA and counted credits for one record set (a year, or any subset)
#[must_use]
pub fn compute_gpa(records: &[CourseRecord], catalog: &Catalog) -> YearGpa {
    let counted = resolve_attempts(records, catalog);
    let total_credits: u32 = counted.iter().map(|c| c.credits).sum();
    let credit_points: f64 = counted.iter().map(CountedCourse::credit_points).sum();

    let gpa = if total_credits == 0 {
        0.0
    } else {
        round2(credit_points / f64::from(total_credits))
    };

    YearGpa { gpa, total_credits }
}

/// Overall GPA as the credit-weighted mean of the yearly GPAs.
///
/// Uses the rounded yearly figures, so it can differ slightly from a single
/// pass over all records.
#[must_use]
pub fn overall_gpa(years: &[YearGpa]) -> f64 {
    let total_credits: u32 = years.iter().map(|y| y.total_credits).sum();
    if total_credits == 0 {
        return 0.0;
    }
    let weighted: f64 = years
        .iter()
        .map(|y| y.gpa * f64::from(y.total_credits))
        .sum();
    round2(weighted / f64::from(total_credits))
}
