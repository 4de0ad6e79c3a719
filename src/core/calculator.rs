//! GPA calculation for a single term
//!
//! Quality points are accumulated unrounded; rounding to two decimals only
//! happens when a figure is presented.

use crate::core::models::Course;
use crate::core::scale::{grade_value, ScaleId};
use crate::shared::numeric::{fmt2, round2};

/// Outcome of a GPA computation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GpaResult {
    /// Quality points divided by credit units, or 0 with no credit
    pub gpa: f64,
    /// Sum of units times grade value
    pub quality_points: f64,
    /// Sum of units over the counted courses
    pub credit_units: f64,
}

impl GpaResult {
    /// Build a result from accumulated sums, guarding the zero-unit case
    #[must_use]
    pub fn from_totals(quality_points: f64, credit_units: f64) -> Self {
        let gpa = if credit_units > 0.0 {
            quality_points / credit_units
        } else {
            0.0
        };
        Self {
            gpa,
            quality_points,
            credit_units,
        }
    }

    /// GPA rounded to two decimals
    #[must_use]
    pub fn rounded(&self) -> f64 {
        round2(self.gpa)
    }

    /// GPA formatted for display (e.g. "3.50")
    #[must_use]
    pub fn display(&self) -> String {
        fmt2(self.gpa)
    }
}

/// Compute the GPA of `courses` under `scale`.
///
/// Courses without positive, finite units are skipped. Grade letters that
/// do not exist on `scale` count as zero quality points.
#[must_use]
pub fn compute_gpa<'a, I>(courses: I, scale: ScaleId) -> GpaResult
where
    I: IntoIterator<Item = &'a Course>,
{
    let (quality_points, credit_units) = courses
        .into_iter()
        .filter(|course| course.has_credit())
        .fold((0.0, 0.0), |(points, units), course| {
            (
                course.units.mul_add(grade_value(scale, &course.grade), points),
                units + course.units,
            )
        });

    GpaResult::from_totals(quality_points, credit_units)
}
