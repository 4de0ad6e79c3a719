//! Semester history store
//!
//! Ordered, in-memory list of stored semesters. Insertion order is display
//! order and indices are positional, so removing an entry shifts every later
//! index down by one.

use crate::core::error::{GpaError, ValidationError};
use crate::core::models::Semester;
use crate::debug;

/// Ordered collection of stored semesters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SemesterHistory {
    semesters: Vec<Semester>,
}

impl SemesterHistory {
    /// Create an empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            semesters: Vec::new(),
        }
    }

    /// Append a semester to the end of the history.
    ///
    /// # Errors
    /// * `ValidationError::EmptySemesterName` if the name is blank
    /// * `ValidationError::ZeroCreditUnits` if no course carries credit
    ///
    /// The history is unchanged when an error is returned.
    pub fn append(&mut self, semester: Semester) -> Result<usize, ValidationError> {
        if semester.name.trim().is_empty() {
            return Err(ValidationError::EmptySemesterName);
        }
        if semester.total_units() <= 0.0 {
            return Err(ValidationError::ZeroCreditUnits);
        }

        debug!(
            "Storing semester '{}' ({} courses, {} units)",
            semester.name,
            semester.course_count(),
            semester.total_units()
        );
        self.semesters.push(semester);
        Ok(self.semesters.len() - 1)
    }

    /// Remove and return the semester at `index`.
    ///
    /// # Errors
    /// Returns `GpaError::InvalidIndex` when `index` is out of range; the
    /// history is left untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<Semester, GpaError> {
        if index >= self.semesters.len() {
            return Err(GpaError::InvalidIndex {
                index,
                len: self.semesters.len(),
            });
        }
        let removed = self.semesters.remove(index);
        debug!("Removed semester '{}' at index {index}", removed.name);
        Ok(removed)
    }

    /// Whether no semesters are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }

    /// Number of stored semesters
    #[must_use]
    pub fn len(&self) -> usize {
        self.semesters.len()
    }

    /// Semester at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Semester> {
        self.semesters.get(index)
    }

    /// Iterate semesters in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Semester> {
        self.semesters.iter()
    }

    /// All semesters as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Semester] {
        &self.semesters
    }

    /// Semesters at the given indices, in the order given; invalid indices are skipped
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Vec<&Semester> {
        indices
            .iter()
            .filter_map(|&idx| self.semesters.get(idx))
            .collect()
    }
}

impl<'a> IntoIterator for &'a SemesterHistory {
    type Item = &'a Semester;
    type IntoIter = std::slice::Iter<'a, Semester>;

    fn into_iter(self) -> Self::IntoIter {
        self.semesters.iter()
    }
}
