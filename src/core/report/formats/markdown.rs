//! Markdown report generator
//!
//! Renders the audit as a single Markdown document. These reports render well
//! in GitHub, GitLab, and VS Code.

use crate::core::error::AuditError;
use crate::core::report::tables::{eligibility_label, Table};
use crate::core::report::{ReportContext, ReportGenerator};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// File name of the rendered report inside the output directory
pub const REPORT_FILE_NAME: &str = "audit_report.md";

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn render(&self, ctx: &ReportContext) -> String {
        let report = &ctx.outcome.report;
        let credits = &ctx.outcome.credits;
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{student}}", ctx.student);
        output = output.replace("{{path}}", &ctx.outcome.path.to_string());
        output = output.replace("{{overall_gpa}}", &format!("{:.2}", report.overall_gpa));
        output = output.replace("{{eligibility}}", eligibility_label(report.eligible));
        output = output.replace("{{degree_class}}", &report.degree_class.to_string());
        output = output.replace("{{suspension}}", &report.suspension.to_string());
        output = output.replace("{{total_credits}}", &report.total_credits().to_string());

        let reasons = if report.reasons.is_empty() {
            "None. All degree requirements are met.\n".to_string()
        } else {
            report.reasons.iter().fold(String::new(), |mut list, reason| {
                let _ = writeln!(list, "- {reason}");
                list
            })
        };
        output = output.replace("{{reasons}}", reasons.trim_end());

        output = output.replace("{{first_year_credits}}", &credits.first_year.to_string());
        output = output.replace("{{second_year_credits}}", &credits.second_year.to_string());
        output = output.replace("{{third_year_credits}}", &credits.third_year.to_string());
        output = output.replace("{{elec_credits}}", &credits.elec.to_string());
        output = output.replace("{{phys_credits}}", &credits.phys.to_string());
        output = output.replace("{{c_or_better}}", &credits.c_or_better.to_string());
        output = output.replace("{{d_or_better}}", &credits.d_or_better.to_string());

        let tables = ctx
            .tables
            .tables()
            .iter()
            .map(Self::table_section)
            .collect::<String>();
        output = output.replace("{{tables}}", &tables);
        output = output.replace("{{version}}", crate::core::get_version());

        output
    }

    /// Render one result table as a Markdown section
    fn table_section(table: &Table) -> String {
        let mut section = String::new();
        let _ = writeln!(section, "## {}\n", table.name);
        let _ = writeln!(section, "| {} |", table.headers.join(" | "));
        let _ = writeln!(section, "|{}", "---|".repeat(table.headers.len()));

        for row in &table.rows {
            let cells: Vec<String> = row.iter().map(|cell| escape_cell(cell)).collect();
            let _ = writeln!(section, "| {} |", cells.join(" | "));
        }
        section.push('\n');
        section
    }
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_dir: &Path) -> Result<Vec<PathBuf>, AuditError> {
        fs::create_dir_all(output_dir).map_err(|e| AuditError::io(output_dir, e))?;

        let path = output_dir.join(REPORT_FILE_NAME);
        fs::write(&path, self.render(ctx)).map_err(|e| AuditError::io(&path, e))?;
        Ok(vec![path])
    }
}
