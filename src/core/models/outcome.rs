//! Audit result models

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Curriculum path a student is following
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurriculumPath {
    /// Student has taken at least one Path 1 course
    Path1,
    /// Every other student
    Path2,
}

impl fmt::Display for CurriculumPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path1 => write!(f, "Path 1"),
            Self::Path2 => write!(f, "Path 2"),
        }
    }
}

/// GPA and counted credits for one year (or any record set)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct YearGpa {
    /// Credit-weighted GPA rounded to 2 decimals, 0 when no credits count
    pub gpa: f64,
    /// Credits that counted toward the GPA
    pub total_credits: u32,
}

/// Honors classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeClass {
    /// First Class
    First,
    /// Second Class (Upper Division)
    SecondUpper,
    /// Second Class (Lower Division)
    SecondLower,
    /// Eligible but no class thresholds met
    NoClass,
    /// Degree eligibility requirements are not met
    EligibilityNotMet,
}

impl fmt::Display for DegreeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::First => "First Class",
            Self::SecondUpper => "Second Class (Upper Division)",
            Self::SecondLower => "Second Class (Lower Division)",
            Self::NoClass => "No Class Obtained",
            Self::EligibilityNotMet => "Eligibility not met",
        };
        write!(f, "{label}")
    }
}

/// Suspension status derived from withheld grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuspensionStatus {
    /// At least one result is withheld
    Suspended,
    /// No withheld results
    NotSuspended,
}

impl fmt::Display for SuspensionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suspended => write!(f, "Suspended"),
            Self::NotSuspended => write!(f, "Not Suspended"),
        }
    }
}

/// GPA, eligibility and class for a student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityReport {
    /// First, second and third year GPA
    pub per_year: [YearGpa; 3],
    /// Credit-weighted average of the yearly GPAs
    pub overall_gpa: f64,
    /// True when no requirement failed
    pub eligible: bool,
    /// Failed requirements, in fixed order
    pub reasons: Vec<String>,
    /// Honors class (or "Eligibility not met")
    pub degree_class: DegreeClass,
    /// Suspension status
    pub suspension: SuspensionStatus,
}

impl EligibilityReport {
    /// Reasons joined into a single line, empty when eligible
    #[must_use]
    pub fn reason_line(&self) -> String {
        self.reasons.join(", ")
    }

    /// Credits counted across all three years
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.per_year.iter().map(|year| year.total_credits).sum()
    }
}

/// Configured course codes that fail the length check, per catalog list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidCodeList {
    /// Catalog list name (e.g., "Compulsory Path 1")
    pub list_name: String,
    /// Offending codes in catalog order
    pub codes: Vec<String>,
}

/// Best result of a course with more than two recorded attempts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousResult {
    /// Course code
    pub course_code: String,
    /// Course name
    pub course_name: String,
    /// Grade of the best attempt
    pub grade: Option<String>,
    /// Academic year of the best attempt
    pub academic_year: u32,
}

/// Course attempt still awaiting a grade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResult {
    /// Course code
    pub course_code: String,
    /// Course name
    pub course_name: String,
    /// Academic year of the attempt
    pub academic_year: u32,
}

/// Diagnostic breakdowns reported alongside the GPA
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Invalid configured course codes, one entry per catalog list
    pub invalid_course_codes: Vec<InvalidCodeList>,
    /// Compulsory courses missing from the transcript, in catalog order
    pub incomplete_compulsory: Vec<String>,
    /// Grade tokens that are not in the valid-grade set
    pub invalid_grades: BTreeSet<String>,
    /// Best results of courses with repeated attempts
    pub previous_results: Vec<PreviousResult>,
    /// Attempts awaiting a result
    pub pending_results: Vec<PendingResult>,
}

/// Credit aggregates the eligibility rules are evaluated against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditSummary {
    /// Counted first-year credits
    pub first_year: u32,
    /// Counted second-year credits
    pub second_year: u32,
    /// Counted third-year credits
    pub third_year: u32,
    /// Graded ELEC credits
    pub elec: u32,
    /// Graded PHYS credits
    pub phys: u32,
    /// Credits with grade point >= 4.0
    pub a_or_better: u32,
    /// Credits with grade point >= 3.0
    pub b_or_better: u32,
    /// Credits with grade point >= 2.0
    pub c_or_better: u32,
    /// Credits with grade point >= 1.0
    pub d_or_better: u32,
    /// An ACLT course appears on the transcript
    pub aclt_completed: bool,
    /// A CMSK course appears on the transcript
    pub cmsk_completed: bool,
}

impl CreditSummary {
    /// Counted credits over all three years
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.first_year + self.second_year + self.third_year
    }
}

/// Everything a single audit pass produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditOutcome {
    /// Curriculum path the student was placed on
    pub path: CurriculumPath,
    /// GPA, eligibility and class
    pub report: EligibilityReport,
    /// Credit aggregates behind the eligibility decision
    pub credits: CreditSummary,
    /// Diagnostic breakdowns
    pub diagnostics: Diagnostics,
}
