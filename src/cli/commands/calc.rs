//! Calc command handler

use gpa_tracker::config::Config;
use gpa_tracker::core::calculator::GpaResult;
use gpa_tracker::core::error::GpaError;
use gpa_tracker::core::models::CourseRow;
use gpa_tracker::core::session::Session;
use gpa_tracker::shared::numeric::fmt2;
use gpa_tracker::{error, info, verbose};

use super::resolve_scale;

/// Run the calc command, exiting non-zero on invalid input.
pub fn run(courses: &[String], scale: Option<&str>, config: &Config) {
    match compute(courses, scale, config) {
        Ok((scale_label, result)) => {
            verbose!(
                "Counted {} units for {} quality points on the {scale_label} scale",
                fmt2(result.credit_units),
                fmt2(result.quality_points)
            );
            println!("GPA: {}", result.display());
        }
        Err(e) => {
            error!("calc failed: {e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Load the pairs into a session and compute the term GPA
///
/// # Errors
/// Fails on a malformed pair, an unknown scale or a grade the scale lacks.
pub fn compute(
    courses: &[String],
    scale: Option<&str>,
    config: &Config,
) -> Result<(String, GpaResult), GpaError> {
    let scale = resolve_scale(scale, config)?;
    let mut session = Session::new(scale);
    for pair in courses {
        let row = CourseRow::parse_pair(pair)?;
        session.push_course(&row.units, &row.grade)?;
    }
    let result = session.compute_current();
    info!(
        "Computed GPA {} from {} course(s) on the {scale} scale",
        result.display(),
        courses.len()
    );
    Ok((scale.to_string(), result))
}
