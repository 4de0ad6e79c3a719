//! Cumulative GPA across stored semesters
//!
//! Every semester is re-evaluated under the scale passed in, not the one that
//! was active when it was stored. Switching scales therefore rewrites every
//! historical figure, and letters the new scale lacks are worth zero.

use crate::core::calculator::{compute_gpa, GpaResult};
use crate::core::models::Semester;
use crate::core::scale::ScaleId;
use crate::shared::numeric::fmt2;
use crate::warn;

/// Cumulative figures over a set of semesters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CgpaResult {
    /// Total quality points over total credit units, or 0 with no credit
    pub cgpa: f64,
    /// Sum of each semester's quality points
    pub total_quality_points: f64,
    /// Sum of each semester's credit units
    pub total_credit_units: f64,
}

impl CgpaResult {
    /// CGPA formatted for display (e.g. "2.75")
    #[must_use]
    pub fn display(&self) -> String {
        fmt2(self.cgpa)
    }
}

/// Aggregate the semesters into a cumulative GPA under `scale`
#[must_use]
pub fn aggregate<'a, I>(semesters: I, scale: ScaleId) -> CgpaResult
where
    I: IntoIterator<Item = &'a Semester>,
{
    let (total_quality_points, total_credit_units) = semesters
        .into_iter()
        .map(|semester| semester_gpa(semester, scale))
        .fold((0.0, 0.0), |(points, units), term| {
            (points + term.quality_points, units + term.credit_units)
        });

    let totals = GpaResult::from_totals(total_quality_points, total_credit_units);
    CgpaResult {
        cgpa: totals.gpa,
        total_quality_points,
        total_credit_units,
    }
}

/// GPA of one stored semester under `scale`, warning about unmatched letters
#[must_use]
pub fn semester_gpa(semester: &Semester, scale: ScaleId) -> GpaResult {
    for course in semester.courses.iter().filter(|c| !scale.contains(&c.grade)) {
        warn!(
            "Grade '{}' in '{}' has no value on the {scale} scale; counting it as 0",
            course.grade, semester.name
        );
    }
    compute_gpa(&semester.courses, scale)
}
