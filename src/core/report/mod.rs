//! Report generation for audit results
//!
//! An [`AuditOutcome`] is first flattened into named [`tables`], then written
//! by one of the [`formats`] writers.

pub mod formats;
pub mod tables;

use crate::core::error::AuditError;
use crate::core::models::AuditOutcome;
use std::path::{Path, PathBuf};

pub use formats::{CsvReporter, MarkdownReporter, ReportFormat};
pub use tables::{eligibility_label, ReportTables, Table};

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Student label, usually the transcript directory name
    pub student: &'a str,
    /// Audit result being reported
    pub outcome: &'a AuditOutcome,
    /// Tables assembled from `outcome`
    pub tables: ReportTables,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub fn new(student: &'a str, outcome: &'a AuditOutcome) -> Self {
        Self {
            student,
            outcome,
            tables: ReportTables::assemble(outcome),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Write the report into `output_dir`, returning the files written
    ///
    /// # Errors
    /// Returns an error if the directory or a report file cannot be written
    fn generate(&self, ctx: &ReportContext, output_dir: &Path) -> Result<Vec<PathBuf>, AuditError>;
}

/// Build the writer for a report format
#[must_use]
pub fn generator_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Csv => Box::new(CsvReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}
