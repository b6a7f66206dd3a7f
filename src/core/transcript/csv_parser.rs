//! CSV parser for yearly enrollment sheets

use crate::core::models::CourseRecord;
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Parse one yearly sheet.
///
/// Columns are matched by header name (`Course Code`, `Course Name`, `AcYear`,
/// `Attempt`, `Grade`); extra columns are ignored and a blank or absent
/// `Grade` cell becomes `None`.
///
/// # Errors
/// Returns an error if a row is missing a required column or a number does not parse
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<CourseRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<EnrollmentRow>() {
        records.push(row?.into());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct EnrollmentRow {
    #[serde(rename = "Course Code")]
    course_code: String,
    #[serde(rename = "Course Name")]
    course_name: String,
    #[serde(rename = "AcYear")]
    academic_year: u32,
    #[serde(rename = "Attempt")]
    attempt: u32,
    #[serde(rename = "Grade", default, deserialize_with = "empty_string_as_none")]
    grade: Option<String>,
}

impl From<EnrollmentRow> for CourseRecord {
    fn from(row: EnrollmentRow) -> Self {
        Self {
            course_code: row.course_code,
            course_name: row.course_name,
            academic_year: row.academic_year,
            attempt: row.attempt,
            grade: row.grade,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
