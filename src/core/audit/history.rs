//! Grade validity, suspension and repeated-attempt history

use crate::core::catalog::Catalog;
use crate::core::models::{CourseRecord, PendingResult, PreviousResult};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Grade token that places a student under suspension
pub const WITHHELD_GRADE: &str = "Withheld";

/// Result of the grade validity and history analysis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeHistory {
    /// A withheld grade was found
    pub suspended: bool,
    /// Present grade tokens that are not valid grades
    pub invalid_grades: BTreeSet<String>,
    /// Best result of each course with more than two attempts
    pub previous_results: Vec<PreviousResult>,
    /// Courses whose attempt is still awaiting a grade
    pub pending_results: Vec<PendingResult>,
}

/// Analyze the merged records.
///
/// Invalid grades are always collected. When any grade is withheld the
/// student is suspended and no attempt history is produced.
#[must_use]
pub fn analyze(records: &[CourseRecord], catalog: &Catalog) -> GradeHistory {
    let invalid_grades = invalid_grades(records, catalog);

    if records
        .iter()
        .any(|r| r.grade.as_deref() == Some(WITHHELD_GRADE))
    {
        logger::debug!("Withheld grade found, skipping attempt history");
        return GradeHistory {
            suspended: true,
            invalid_grades,
            ..GradeHistory::default()
        };
    }

    let mut previous_results = Vec::new();
    let mut pending_results = Vec::new();

    for ((course_code, course_name), attempts) in group_attempts(records) {
        if attempts.len() == 3 && distinct_points(&attempts, catalog) == 2 {
            continue;
        }

        if attempts.len() > 2 {
            if let Some(best) = best_attempt(&attempts, catalog) {
                previous_results.push(PreviousResult {
                    course_code: course_code.to_string(),
                    course_name: course_name.to_string(),
                    grade: best.grade.clone(),
                    academic_year: best.academic_year,
                });
            }
        } else if attempts[0].grade_token().is_none() {
            pending_results.push(PendingResult {
                course_code: course_code.to_string(),
                course_name: course_name.to_string(),
                academic_year: attempts[0].academic_year,
            });
        }
    }

    GradeHistory {
        suspended: false,
        invalid_grades,
        previous_results,
        pending_results,
    }
}

/// Distinct present grade tokens missing from the valid-grade set
fn invalid_grades(records: &[CourseRecord], catalog: &Catalog) -> BTreeSet<String> {
    records
        .iter()
        .filter_map(CourseRecord::grade_token)
        .filter(|grade| !catalog.is_valid_grade(grade))
        .map(str::to_string)
        .collect()
}

/// Group records by (code, name), keys in ascending order, attempts in input order
fn group_attempts(records: &[CourseRecord]) -> BTreeMap<(&str, &str), Vec<&CourseRecord>> {
    let mut groups: BTreeMap<(&str, &str), Vec<&CourseRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.course_code.as_str(), record.course_name.as_str()))
            .or_default()
            .push(record);
    }
    groups
}

fn attempt_point(record: &CourseRecord, catalog: &Catalog) -> Option<f64> {
    record.grade_token().and_then(|g| catalog.grade_point(g))
}

/// Number of distinct grade points; an unmapped or missing grade counts as one value
fn distinct_points(attempts: &[&CourseRecord], catalog: &Catalog) -> usize {
    attempts
        .iter()
        .map(|r| attempt_point(r, catalog).map(f64::to_bits))
        .collect::<HashSet<_>>()
        .len()
}

/// Highest grade point first (unmapped last), then earliest year, then input order
fn best_attempt<'a>(attempts: &[&'a CourseRecord], catalog: &Catalog) -> Option<&'a CourseRecord> {
    let mut ranked = attempts.to_vec();
    ranked.sort_by(|a, b| {
        compare_points(attempt_point(a, catalog), attempt_point(b, catalog))
            .then_with(|| a.academic_year.cmp(&b.academic_year))
    });
    ranked.first().copied()
}

fn compare_points(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
