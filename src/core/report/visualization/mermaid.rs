//! Mermaid chart generator for GPA trends
//!
//! Emits `xychart-beta` syntax, which GitHub and GitLab render as a line chart.

use crate::core::chart::ChartSeries;
use crate::shared::numeric::fmt2;
use std::fmt::Write;

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a fenced Mermaid line chart of GPA per semester
    #[must_use]
    pub fn generate_line_chart(series: &ChartSeries) -> String {
        let labels: Vec<String> = series
            .labels
            .iter()
            .map(|label| format!("\"{}\"", Self::sanitize_label(label)))
            .collect();
        let values: Vec<String> = series.values.iter().map(|v| fmt2(*v)).collect();

        let mut output = String::from("```mermaid\nxychart-beta\n");
        let _ = writeln!(output, "    title \"GPA per Semester\"");
        let _ = writeln!(output, "    x-axis [{}]", labels.join(", "));
        let _ = writeln!(output, "    y-axis \"GPA\" 0 --> {}", series.y_max);
        let _ = writeln!(output, "    line [{}]", values.join(", "));
        output.push_str("```\n");
        output
    }

    /// Strip characters that would end a quoted Mermaid label
    fn sanitize_label(label: &str) -> String {
        label.replace('"', "'").replace(['\n', '\r'], " ")
    }
}
