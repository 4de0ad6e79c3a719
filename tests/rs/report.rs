//! Integration tests for report rendering

use gpa_tracker::core::models::Course;
use gpa_tracker::core::report::{
    render_session, HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
    TextReporter,
};
use gpa_tracker::core::scale::ScaleId;
use gpa_tracker::core::session::Session;
use std::fs;
use tempfile::TempDir;

fn sample_session() -> Session {
    let mut session = Session::new(ScaleId::Four);
    session
        .store_courses("Fall", vec![Course::new(3.0, "A"), Course::new(3.0, "B")])
        .unwrap();
    session
        .store_courses("Spring", vec![Course::new(6.0, "C")])
        .unwrap();
    session
}

#[test]
fn markdown_report_to_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut session = sample_session();
    session.toggle_chart_selection(0).unwrap();
    session.toggle_chart_selection(1).unwrap();

    let summary = session.summary();
    let chart = session.chart();
    let ctx = ReportContext::new("Progress", &summary, chart.as_ref());
    let path = dir.path().join("nested").join("report.md");
    MarkdownReporter::new()
        .generate(&ctx, &path)
        .expect("Failed to write report");

    let content = fs::read_to_string(path).expect("Failed to read report");
    assert!(content.starts_with("# Progress"));
    assert!(content.contains("**CGPA:** 2.75"));
    assert!(content.contains("Classification: Second Class Honours (Lower Division)"));
    assert!(content.contains("| 0 | Fall | 6.00 | 3.50 | ✓ |"));
    assert!(content.contains("xychart-beta"));
    assert!(content.contains("line [3.50, 2.00]"));
}

#[test]
fn html_report_to_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let session = sample_session();

    let summary = session.summary();
    let ctx = ReportContext::new("Progress", &summary, None);
    let path = dir.path().join("report.html");
    HtmlReporter::new()
        .generate(&ctx, &path)
        .expect("Failed to write report");

    let content = fs::read_to_string(path).expect("Failed to read report");
    assert!(content.contains("<title>Progress</title>"));
    assert!(content.contains("id=\"cgpa-result\">2.75<"));
    assert!(content.contains("Select at least two semesters to show a trend."));
    assert!(!content.contains("<svg"));
}

#[test]
fn text_report_lists_history() {
    let session = sample_session();
    let summary = session.summary();
    let ctx = ReportContext::new("Progress", &summary, None);
    let text = TextReporter::new().render(&ctx).unwrap();

    assert!(text.starts_with("=== Progress (scale 4.0) ==="));
    assert!(text.contains("CGPA:        2.75"));
    assert!(text.contains("Fall"));
    assert!(text.contains("Spring"));
}

#[test]
fn empty_session_renders_zero_without_band() {
    let session = Session::new(ScaleId::Ten);
    for format in [ReportFormat::Markdown, ReportFormat::Html, ReportFormat::Text] {
        let out = render_session(&session, format, "Empty").unwrap();
        assert!(out.contains("0.00"), "{format} should show 0.00");
        assert!(!out.contains("Classification:"), "{format} should omit the band");
    }
}

#[test]
fn scale_change_is_reflected_in_reports() {
    let mut session = sample_session();
    session.set_scale(ScaleId::Five);
    let text = render_session(&session, ReportFormat::Text, "Five").unwrap();
    assert!(text.contains("(scale 5.0)"));
    assert!(text.contains("CGPA:        3.75"));
}
