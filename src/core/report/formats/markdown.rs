//! Markdown report generator
//!
//! Generates GPA reports in Markdown with an embedded Mermaid line chart.
//! These render well in GitHub, GitLab, and VS Code.

use crate::core::error::GpaError;
use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::shared::numeric::fmt2;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{title}}", ctx.title);
        output = output.replace("{{scale}}", &ctx.scale_label());
        output = output.replace("{{current_gpa}}", &ctx.current_gpa());
        output = output.replace(
            "{{current_units}}",
            &fmt2(ctx.summary.current.credit_units),
        );
        output = output.replace("{{cgpa}}", &ctx.cgpa());
        output = output.replace("{{semester_count}}", &ctx.semester_count().to_string());
        output = output.replace("{{total_units}}", &ctx.total_units());
        output = output.replace("{{classification}}", &ctx.classification_line());
        output = output.replace("{{history_table}}", &Self::generate_history_table(ctx));

        let trend = ctx.chart.map_or_else(
            || "_Select at least two semesters to show a trend._\n".to_string(),
            MermaidGenerator::generate_line_chart,
        );
        output = output.replace("{{trend}}", &trend);

        output
    }

    /// Generate the semester history table
    fn generate_history_table(ctx: &ReportContext) -> String {
        if ctx.summary.history.is_empty() {
            return "_No semesters stored._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| # | Semester | Units | GPA | Charted |\n");
        table.push_str("|---|---|---|---|---|\n");

        for entry in &ctx.summary.history {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {} |",
                entry.index,
                escape_cell(&entry.name),
                fmt2(entry.credit_units),
                fmt2(entry.gpa),
                if entry.selected { "✓" } else { "" }
            );
        }

        table
    }
}

/// Keep user text from breaking the table layout
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, GpaError> {
        Ok(self.render_template(ctx))
    }
}
