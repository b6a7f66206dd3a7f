//! Named result tables built from an audit outcome

use crate::core::models::{AuditOutcome, StudyYear};

/// Sheet name of the GPA summary table
pub const GPA_TABLE: &str = "GPA and Eligibility";
/// Sheet name of the invalid catalog codes table
pub const INVALID_COURSES_TABLE: &str = "Invalid Courses";
/// Sheet name of the missing compulsory courses table
pub const INCOMPLETE_COMPULSORY_TABLE: &str = "Incomplete Compulsory Courses";
/// Sheet name of the invalid grades table
pub const ERROR_GRADES_TABLE: &str = "Error Grades";
/// Sheet name of the repeated-attempt table
pub const PREVIOUS_RESULTS_TABLE: &str = "Previous Results";
/// Sheet name of the pending results table
pub const PENDING_RESULTS_TABLE: &str = "Pending Results";

/// A named table of string cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Table (sheet) name
    pub name: &'static str,
    /// Column headers
    pub headers: Vec<&'static str>,
    /// Rows, each as long as `headers`
    pub rows: Vec<Vec<String>>,
}

impl Table {
    fn new(name: &'static str, headers: &[&'static str]) -> Self {
        Self {
            name,
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Returns true if the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// File-system friendly form of the table name (e.g., `gpa_and_eligibility`)
    #[must_use]
    pub fn file_stem(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }
}

/// Every table of an audit report; the GPA table is always present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTables {
    tables: Vec<Table>,
}

impl ReportTables {
    /// Build the report tables, leaving out the optional diagnostic tables with no rows
    #[must_use]
    pub fn assemble(outcome: &AuditOutcome) -> Self {
        let diagnostics = &outcome.diagnostics;
        let mut tables = vec![gpa_table(outcome)];

        let mut invalid = Table::new(INVALID_COURSES_TABLE, &["List", "Course Code"]);
        for list in &diagnostics.invalid_course_codes {
            for code in &list.codes {
                invalid.rows.push(vec![list.list_name.clone(), code.clone()]);
            }
        }
        tables.push(invalid);

        let mut incomplete = Table::new(
            INCOMPLETE_COMPULSORY_TABLE,
            &[INCOMPLETE_COMPULSORY_TABLE],
        );
        incomplete.rows = diagnostics
            .incomplete_compulsory
            .iter()
            .map(|code| vec![code.clone()])
            .collect();
        tables.push(incomplete);

        let mut grades = Table::new(ERROR_GRADES_TABLE, &[ERROR_GRADES_TABLE]);
        grades.rows = diagnostics
            .invalid_grades
            .iter()
            .map(|grade| vec![grade.clone()])
            .collect();
        tables.push(grades);

        let mut previous = Table::new(
            PREVIOUS_RESULTS_TABLE,
            &["Course Code", "Course Name", "Previous Grade", "AcYear"],
        );
        previous.rows = diagnostics
            .previous_results
            .iter()
            .map(|r| {
                vec![
                    r.course_code.clone(),
                    r.course_name.clone(),
                    r.grade.clone().unwrap_or_default(),
                    r.academic_year.to_string(),
                ]
            })
            .collect();
        tables.push(previous);

        let mut pending = Table::new(
            PENDING_RESULTS_TABLE,
            &["Course Code", "Course Name", "AcYear"],
        );
        pending.rows = diagnostics
            .pending_results
            .iter()
            .map(|r| {
                vec![
                    r.course_code.clone(),
                    r.course_name.clone(),
                    r.academic_year.to_string(),
                ]
            })
            .collect();
        tables.push(pending);

        tables.retain(|table| {
            table.name == GPA_TABLE || table.name == INVALID_COURSES_TABLE || !table.is_empty()
        });
        Self { tables }
    }

    /// Tables in report order
    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Look up a table by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}

/// Yearly rows carry only the GPA; the verdict columns sit on the Overall row
fn gpa_table(outcome: &AuditOutcome) -> Table {
    let report = &outcome.report;
    let mut table = Table::new(
        GPA_TABLE,
        &[
            "Year",
            "GPA",
            "Degree Eligibility",
            "Reason",
            "Class",
            "Suspension Status",
        ],
    );

    for (year, result) in StudyYear::ALL.iter().zip(report.per_year.iter()) {
        table.rows.push(vec![
            year.to_string(),
            format!("{:.2}", result.gpa),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ]);
    }

    table.rows.push(vec![
        "Overall".to_string(),
        format!("{:.2}", report.overall_gpa),
        eligibility_label(report.eligible).to_string(),
        report.reason_line(),
        report.degree_class.to_string(),
        report.suspension.to_string(),
    ]);
    table
}

/// Text written to the "Degree Eligibility" column
#[must_use]
pub const fn eligibility_label(eligible: bool) -> &'static str {
    if eligible {
        "Eligible"
    } else {
        "Not Eligible"
    }
}
