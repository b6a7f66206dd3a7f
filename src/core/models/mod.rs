//! Data models for `degree-audit`

pub mod outcome;
pub mod record;

pub use outcome::{
    AuditOutcome, CreditSummary, CurriculumPath, DegreeClass, Diagnostics, EligibilityReport,
    InvalidCodeList, PendingResult, PreviousResult, SuspensionStatus, YearGpa,
};
pub use record::{credits_for, normalize_code, CourseRecord, StudyYear, Transcript};
