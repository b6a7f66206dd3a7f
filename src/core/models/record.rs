//! Enrollment record and transcript models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalize a course code for comparison: trimmed and uppercased.
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Credits carried by a course, taken from the last character of its code.
///
/// `"BIOL123456"` carries 6 credits; a code that does not end in a digit
/// (e.g. `"ABCD EFGHI"`) carries none.
#[must_use]
pub fn credits_for(code: &str) -> u32 {
    code.chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .unwrap_or(0)
}

/// One row of a student's enrollment history
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course code (e.g., "ELEC 21012")
    pub course_code: String,

    /// Course title as printed on the transcript
    pub course_name: String,

    /// Academic year ordinal the attempt was taken in
    pub academic_year: u32,

    /// Attempt number for this course
    pub attempt: u32,

    /// Grade token, `None` while the result is pending
    pub grade: Option<String>,
}

impl CourseRecord {
    /// Create a new enrollment record
    ///
    /// # Arguments
    /// * `course_code` - Course code as recorded
    /// * `course_name` - Course title
    /// * `academic_year` - Academic year ordinal
    /// * `attempt` - Attempt number
    /// * `grade` - Grade token, or `None` for a pending result
    #[must_use]
    pub fn new(
        course_code: impl Into<String>,
        course_name: impl Into<String>,
        academic_year: u32,
        attempt: u32,
        grade: Option<&str>,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            course_name: course_name.into(),
            academic_year,
            attempt,
            grade: grade.map(str::to_string),
        }
    }

    /// Copy of this record with its course code normalized
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            course_code: normalize_code(&self.course_code),
            ..self.clone()
        }
    }

    /// The grade token, treating an empty grade the same as a missing one
    #[must_use]
    pub fn grade_token(&self) -> Option<&str> {
        self.grade.as_deref().filter(|grade| !grade.is_empty())
    }

    /// Credits derived from the course code
    #[must_use]
    pub fn credits(&self) -> u32 {
        credits_for(&self.course_code)
    }
}

/// Year of study a record sheet belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudyYear {
    /// First year of study
    First,
    /// Second year of study
    Second,
    /// Third year of study
    Third,
}

impl StudyYear {
    /// All years in transcript order
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    /// Sheet name used for this year's records (e.g., `first` for `first.csv`)
    #[must_use]
    pub const fn sheet_name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
        }
    }
}

impl fmt::Display for StudyYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "First Year"),
            Self::Second => write!(f, "Second Year"),
            Self::Third => write!(f, "Third Year"),
        }
    }
}

/// A student's records split by year of study
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// First-year records in sheet order
    pub first: Vec<CourseRecord>,
    /// Second-year records in sheet order
    pub second: Vec<CourseRecord>,
    /// Third-year records in sheet order
    pub third: Vec<CourseRecord>,
}

impl Transcript {
    /// Create a transcript from the three yearly record sheets
    #[must_use]
    pub const fn new(
        first: Vec<CourseRecord>,
        second: Vec<CourseRecord>,
        third: Vec<CourseRecord>,
    ) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Records for one year of study
    #[must_use]
    pub fn year(&self, year: StudyYear) -> &[CourseRecord] {
        match year {
            StudyYear::First => &self.first,
            StudyYear::Second => &self.second,
            StudyYear::Third => &self.third,
        }
    }

    /// Records for each year, in transcript order
    #[must_use]
    pub fn years(&self) -> [&[CourseRecord]; 3] {
        StudyYear::ALL.map(|year| self.year(year))
    }

    /// Iterate every record, first year to third year
    pub fn records(&self) -> impl Iterator<Item = &CourseRecord> {
        self.first.iter().chain(&self.second).chain(&self.third)
    }

    /// Total number of records across all years
    #[must_use]
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len() + self.third.len()
    }

    /// Returns true if no year has any records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
