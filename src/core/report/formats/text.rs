//! Plain text report for terminal output

use crate::core::error::GpaError;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::shared::numeric::fmt2;
use std::fmt::Write;

/// Plain text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, GpaError> {
        let mut out = String::new();
        let _ = writeln!(out, "=== {} (scale {}) ===", ctx.title, ctx.scale_label());
        let _ = writeln!(out, "Current GPA: {}", ctx.current_gpa());
        let _ = writeln!(out, "CGPA:        {}", ctx.cgpa());
        let classification = ctx.classification_line();
        if !classification.is_empty() {
            let _ = writeln!(out, "{classification}");
        }

        if !ctx.summary.history.is_empty() {
            let width = ctx
                .summary
                .history
                .iter()
                .map(|e| e.name.chars().count())
                .max()
                .unwrap_or(0)
                .max("Semester".len());

            out.push('\n');
            let _ = writeln!(out, "  #  {:<width$}  {:>7}  {:>5}  Chart", "Semester", "Units", "GPA");
            for entry in &ctx.summary.history {
                let _ = writeln!(
                    out,
                    "{:>3}  {:<width$}  {:>7}  {:>5}  {}",
                    entry.index,
                    entry.name,
                    fmt2(entry.credit_units),
                    fmt2(entry.gpa),
                    if entry.selected { "*" } else { "" }
                );
            }
        }

        if let Some(chart) = ctx.chart {
            out.push('\n');
            let _ = writeln!(out, "Trend (0 - {}):", chart.y_max);
            for (label, value) in chart.points() {
                let _ = writeln!(out, "  {label}: {}", fmt2(value));
            }
        }

        Ok(out)
    }
}
