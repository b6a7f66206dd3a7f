//! Merge the yearly record sheets into one normalized record set

use crate::core::models::{CourseRecord, Transcript};
use std::collections::HashSet;

/// Merge first, second and third year records into one sequence.
///
/// Rows identical in code, name, year, attempt and grade (as read) are kept
/// once, at their first position. Surviving rows get a normalized course code.
#[must_use]
pub fn merge_years(transcript: &Transcript) -> Vec<CourseRecord> {
    let mut seen: HashSet<&CourseRecord> = HashSet::with_capacity(transcript.len());
    transcript
        .records()
        .filter(|record| seen.insert(*record))
        .map(CourseRecord::normalized)
        .collect()
}
