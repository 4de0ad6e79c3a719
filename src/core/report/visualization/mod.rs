//! Visualization generation for GPA trends
//!
//! Provides a Mermaid line chart (for Markdown) and inline SVG geometry
//! (for HTML).

pub mod mermaid;
pub mod svg;

pub use mermaid::MermaidGenerator;
pub use svg::SvgLineChart;
