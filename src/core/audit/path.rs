//! Curriculum path determination

use crate::core::catalog::Catalog;
use crate::core::models::{CourseRecord, CurriculumPath};
use std::collections::HashSet;

/// Path 1 if any Path 1 course appears among the (normalized) records, else Path 2
#[must_use]
pub fn determine_path(records: &[CourseRecord], catalog: &Catalog) -> CurriculumPath {
    let taken: HashSet<&str> = records.iter().map(|r| r.course_code.as_str()).collect();
    if catalog
        .path1_courses()
        .iter()
        .any(|code| taken.contains(code.as_str()))
    {
        CurriculumPath::Path1
    } else {
        CurriculumPath::Path2
    }
}
