//! Compulsory course completion check

use crate::core::catalog::Catalog;
use crate::core::models::{CourseRecord, CurriculumPath};
use std::collections::HashSet;

/// Completion state of the compulsory list for a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompulsoryStatus {
    /// True when every compulsory course appears on the transcript
    pub complete: bool,
    /// Compulsory courses not found, in catalog order
    pub missing: Vec<String>,
}

/// Check the path's compulsory courses against the (normalized) records.
///
/// A course counts as taken whenever its code appears, whatever the grade.
#[must_use]
pub fn check_compulsory(
    records: &[CourseRecord],
    path: CurriculumPath,
    catalog: &Catalog,
) -> CompulsoryStatus {
    let taken: HashSet<&str> = records.iter().map(|r| r.course_code.as_str()).collect();
    let missing: Vec<String> = catalog
        .compulsory_for(path)
        .iter()
        .filter(|code| !taken.contains(code.as_str()))
        .cloned()
        .collect();

    CompulsoryStatus {
        complete: missing.is_empty(),
        missing,
    }
}
