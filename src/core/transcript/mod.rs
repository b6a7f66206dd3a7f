//! Transcript input: one CSV sheet per year of study in a directory
//!
//! ```text
//! student/
//!   first.csv
//!   second.csv
//!   third.csv
//! ```

pub mod csv_parser;

pub use csv_parser::parse_records;

use crate::core::error::AuditError;
use crate::core::models::{CourseRecord, StudyYear, Transcript};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Path of a year's sheet inside a transcript directory
#[must_use]
pub fn sheet_path(dir: &Path, year: StudyYear) -> PathBuf {
    dir.join(format!("{}.csv", year.sheet_name()))
}

/// Read one yearly sheet
///
/// # Errors
/// Returns an error if the file cannot be opened or a row cannot be decoded
pub fn read_year_file<P: AsRef<Path>>(path: P) -> Result<Vec<CourseRecord>, AuditError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AuditError::io(path, e))?;
    let records = parse_records(file).map_err(|e| AuditError::csv(path, e))?;
    logger::debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load the three yearly sheets of a transcript directory
///
/// # Errors
/// Returns [`AuditError::MissingYear`] if a sheet is absent, or the read error
/// of the first sheet that fails to parse
pub fn load_transcript<P: AsRef<Path>>(dir: P) -> Result<Transcript, AuditError> {
    let dir = dir.as_ref();
    let load = |year: StudyYear| {
        let path = sheet_path(dir, year);
        if path.is_file() {
            read_year_file(&path)
        } else {
            Err(AuditError::MissingYear(path))
        }
    };

    let transcript = Transcript::new(
        load(StudyYear::First)?,
        load(StudyYear::Second)?,
        load(StudyYear::Third)?,
    );
    logger::verbose!(
        "Loaded transcript from {} ({} records)",
        dir.display(),
        transcript.len()
    );
    Ok(transcript)
}
