//! Report generation for GPA summaries
//!
//! Renders a session snapshot (current term, cumulative figures, history and
//! an optional trend chart) as Markdown, HTML or plain text.

pub mod formats;
pub mod visualization;

use crate::core::chart::ChartSeries;
use crate::core::error::GpaError;
use crate::core::session::{Session, Summary};
use crate::shared::numeric::fmt2;
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat, TextReporter};
pub use visualization::{MermaidGenerator, SvgLineChart};

/// Data context for report generation
///
/// Aggregates everything a template needs so every format reads the same
/// figures.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Report heading
    pub title: &'a str,
    /// Figures computed from the session
    pub summary: &'a Summary,
    /// Trend series, when at least two semesters are selected
    pub chart: Option<&'a ChartSeries>,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        title: &'a str,
        summary: &'a Summary,
        chart: Option<&'a ChartSeries>,
    ) -> Self {
        Self {
            title,
            summary,
            chart,
        }
    }

    /// Scale label (e.g. "4.0")
    #[must_use]
    pub fn scale_label(&self) -> String {
        self.summary.scale.to_string()
    }

    /// Current-term GPA to two decimals
    #[must_use]
    pub fn current_gpa(&self) -> String {
        self.summary.current.display()
    }

    /// Cumulative GPA to two decimals; "0.00" with no history
    #[must_use]
    pub fn cgpa(&self) -> String {
        self.summary.cumulative.display()
    }

    /// "Classification: <band>", or empty when there is nothing to classify
    #[must_use]
    pub fn classification_line(&self) -> String {
        self.summary
            .classification
            .map(|c| format!("Classification: {c}"))
            .unwrap_or_default()
    }

    /// Total credit units across the history
    #[must_use]
    pub fn total_units(&self) -> String {
        fmt2(self.summary.cumulative.total_credit_units)
    }

    /// Number of stored semesters
    #[must_use]
    pub fn semester_count(&self) -> usize {
        self.summary.history.len()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, GpaError>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), GpaError> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, content)?;
        Ok(())
    }
}

/// Generator that produces `format`
#[must_use]
pub fn generator_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Text => Box::new(TextReporter::new()),
    }
}

/// Render `session` in `format` under `title`
///
/// # Errors
/// Returns an error if the chosen generator fails to render.
pub fn render_session(session: &Session, format: ReportFormat, title: &str) -> Result<String, GpaError> {
    let summary = session.summary();
    let chart = session.chart();
    let ctx = ReportContext::new(title, &summary, chart.as_ref());
    generator_for(format).render(&ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scale::ScaleId;

    #[test]
    fn test_generator_matches_format() {
        let session = Session::new(ScaleId::Four);
        let summary = session.summary();
        let ctx = ReportContext::new("Check", &summary, None);

        let md = generator_for(ReportFormat::Markdown).render(&ctx).unwrap();
        let html = generator_for(ReportFormat::Html).render(&ctx).unwrap();
        let text = generator_for(ReportFormat::Text).render(&ctx).unwrap();
        assert!(md.starts_with("# Check"));
        assert!(html.contains("<title>Check</title>"));
        assert!(text.starts_with("=== Check (scale 4.0) ==="));
    }
}
