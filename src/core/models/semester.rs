//! Semester model

use crate::core::models::Course;
use serde::{Deserialize, Serialize};

/// A stored academic term: a name and the courses recorded for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester name (e.g., "Fall 2024")
    pub name: String,

    /// Courses in entry order
    pub courses: Vec<Course>,
}

impl Semester {
    /// Create a new semester
    #[must_use]
    pub fn new(name: impl Into<String>, courses: Vec<Course>) -> Self {
        Self {
            name: name.into(),
            courses,
        }
    }

    /// Total credit units across courses that carry credit
    #[must_use]
    pub fn total_units(&self) -> f64 {
        self.courses
            .iter()
            .filter(|c| c.has_credit())
            .map(|c| c.units)
            .sum()
    }

    /// Number of courses in the semester
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}
