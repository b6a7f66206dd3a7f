//! CSV report generator
//!
//! Writes each result table to `<table_name>.csv` in the output directory,
//! header row first.

use crate::core::error::AuditError;
use crate::core::report::{ReportContext, ReportGenerator, Table};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// CSV report generator
pub struct CsvReporter;

impl CsvReporter {
    /// Create a new CSV reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Write one table as CSV
    ///
    /// # Errors
    /// Returns an error if a record cannot be written
    pub fn write_table<W: Write>(table: &Table, writer: W) -> Result<(), ::csv::Error> {
        let mut csv_writer = ::csv::Writer::from_writer(writer);
        csv_writer.write_record(&table.headers)?;
        for row in &table.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate(&self, ctx: &ReportContext, output_dir: &Path) -> Result<Vec<PathBuf>, AuditError> {
        fs::create_dir_all(output_dir).map_err(|e| AuditError::io(output_dir, e))?;

        let mut written = Vec::with_capacity(ctx.tables.tables().len());
        for table in ctx.tables.tables() {
            let path = output_dir.join(format!("{}.csv", table.file_stem()));
            let file = fs::File::create(&path).map_err(|e| AuditError::io(&path, e))?;
            Self::write_table(table, file).map_err(|e| AuditError::csv(&path, e))?;
            logger::debug!("Wrote {} rows to {}", table.rows.len(), path.display());
            written.push(path);
        }
        Ok(written)
    }
}
