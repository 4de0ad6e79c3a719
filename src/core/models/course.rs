//! Course model

use crate::core::error::ValidationError;
use crate::core::scale::ScaleId;
use crate::shared::numeric::parse_units;
use serde::{Deserialize, Serialize};

/// A graded course inside a stored semester.
///
/// Only the letter is kept, never its numeric value, so the course can be
/// re-read under whichever scale is active later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Credit units (can be fractional)
    pub units: f64,

    /// Grade letter as recorded (e.g. "A", "B+")
    pub grade: String,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `units` - Credit units
    /// * `grade` - Grade letter
    #[must_use]
    pub fn new(units: f64, grade: impl Into<String>) -> Self {
        Self {
            units,
            grade: grade.into(),
        }
    }

    /// Whether this course counts towards a GPA (finite, positive units)
    #[must_use]
    pub fn has_credit(&self) -> bool {
        self.units.is_finite() && self.units > 0.0
    }
}

/// An editable course row as supplied by an input collector.
///
/// Units are kept as raw text; rows whose units do not read as a positive
/// number are incomplete and skipped by every computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow {
    /// Raw units text (may be blank)
    pub units: String,
    /// Selected grade letter
    pub grade: String,
}

impl CourseRow {
    /// A blank row defaulting to the top grade of `scale`
    #[must_use]
    pub fn blank(scale: ScaleId) -> Self {
        Self {
            units: String::new(),
            grade: scale.top_grade().letter.to_string(),
        }
    }

    /// Create a row from raw parts
    #[must_use]
    pub fn new(units: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            units: units.into(),
            grade: grade.into(),
        }
    }

    /// Parse a `UNITS:GRADE` pair such as `3:A` or `1.5:B+`
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidUnits` when the separator is missing.
    pub fn parse_pair(pair: &str) -> Result<Self, ValidationError> {
        let (units, grade) = pair
            .split_once(':')
            .ok_or_else(|| ValidationError::InvalidUnits(pair.to_string()))?;
        Ok(Self::new(units.trim(), grade.trim()))
    }

    /// Convert to a stored course if the units are usable
    #[must_use]
    pub fn to_course(&self) -> Option<Course> {
        parse_units(&self.units)
            .map(|units| Course::new(units, self.grade.clone()))
            .filter(Course::has_credit)
    }
}
