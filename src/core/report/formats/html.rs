//! HTML report generator
//!
//! Renders a self-contained HTML page through an askama template, with the
//! trend drawn as inline SVG so no script or network access is needed.

use crate::core::error::GpaError;
use crate::core::report::visualization::svg::{SvgLineChart, HEIGHT, PADDING, WIDTH};
use crate::core::report::{ReportContext, ReportGenerator};
use crate::shared::numeric::fmt2;
use askama::Template;

/// History row, pre-formatted for the template
struct HtmlRow {
    index: usize,
    name: String,
    units: String,
    gpa: String,
    selected: bool,
}

/// Template context for `report.html`
#[derive(Template)]
#[template(path = "report.html")]
struct HtmlReportTemplate {
    title: String,
    scale: String,
    current_gpa: String,
    cgpa: String,
    classification: String,
    rows: Vec<HtmlRow>,
    chart: Option<SvgLineChart>,
    width: f64,
    height: f64,
    padding: f64,
    baseline: f64,
    right: f64,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn build_template(ctx: &ReportContext) -> HtmlReportTemplate {
        let rows = ctx
            .summary
            .history
            .iter()
            .map(|entry| HtmlRow {
                index: entry.index,
                name: entry.name.clone(),
                units: fmt2(entry.credit_units),
                gpa: fmt2(entry.gpa),
                selected: entry.selected,
            })
            .collect();

        HtmlReportTemplate {
            title: ctx.title.to_string(),
            scale: ctx.scale_label(),
            current_gpa: ctx.current_gpa(),
            cgpa: ctx.cgpa(),
            classification: ctx.classification_line(),
            rows,
            chart: ctx.chart.map(SvgLineChart::from_series),
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            baseline: HEIGHT - PADDING,
            right: WIDTH - PADDING,
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, GpaError> {
        Self::build_template(ctx)
            .render()
            .map_err(|e| GpaError::Report(e.to_string()))
    }
}
