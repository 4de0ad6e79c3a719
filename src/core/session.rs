//! Application state and the command interface that mutates it
//!
//! A `Session` owns everything a front end mutates: the active scale, the
//! editable course rows of the current term, the stored history and the set
//! of history entries picked for the trend chart. Each command runs to
//! completion and either applies fully or returns an error with no change.

use crate::core::aggregate::{aggregate, semester_gpa, CgpaResult};
use crate::core::calculator::{compute_gpa, GpaResult};
use crate::core::chart::{build_chart, ChartSeries};
use crate::core::classification::{classify, Classification};
use crate::core::error::{GpaError, ValidationError};
use crate::core::history::SemesterHistory;
use crate::core::models::{Course, CourseRow, Semester};
use crate::core::scale::ScaleId;
use crate::debug;
use std::collections::BTreeSet;

/// One history entry as presented to a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Position in the history
    pub index: usize,
    /// Semester name
    pub name: String,
    /// GPA under the active scale
    pub gpa: f64,
    /// Credit units counted
    pub credit_units: f64,
    /// Whether the entry is selected for the chart
    pub selected: bool,
}

/// Everything a renderer needs after a command
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Scale the figures were computed under
    pub scale: ScaleId,
    /// GPA of the rows currently being edited
    pub current: GpaResult,
    /// Cumulative figures over the whole history
    pub cumulative: CgpaResult,
    /// Band for the cumulative GPA, if any
    pub classification: Option<Classification>,
    /// History rows in display order
    pub history: Vec<HistoryEntry>,
}

/// In-memory state for one user session
#[derive(Debug, Clone)]
pub struct Session {
    scale: ScaleId,
    rows: Vec<CourseRow>,
    history: SemesterHistory,
    chart_selection: BTreeSet<usize>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ScaleId::default())
    }
}

impl Session {
    /// Start a session on `scale` with a single blank course row
    #[must_use]
    pub fn new(scale: ScaleId) -> Self {
        Self {
            scale,
            rows: vec![CourseRow::blank(scale)],
            history: SemesterHistory::new(),
            chart_selection: BTreeSet::new(),
        }
    }

    /// Active grading scale
    #[must_use]
    pub const fn scale(&self) -> ScaleId {
        self.scale
    }

    /// Course rows of the term being edited
    #[must_use]
    pub fn rows(&self) -> &[CourseRow] {
        &self.rows
    }

    /// Stored semesters
    #[must_use]
    pub const fn history(&self) -> &SemesterHistory {
        &self.history
    }

    /// History indices currently picked for the chart, ascending
    #[must_use]
    pub const fn chart_selection(&self) -> &BTreeSet<usize> {
        &self.chart_selection
    }

    /// Append a blank course row. Returns its index.
    pub fn add_course(&mut self) -> usize {
        self.rows.push(CourseRow::blank(self.scale));
        self.rows.len() - 1
    }

    /// Remove the course row at `row`.
    ///
    /// # Errors
    /// * `GpaError::LastCourseRow` if it is the only row left
    /// * `GpaError::InvalidIndex` if `row` does not exist
    pub fn remove_course(&mut self, row: usize) -> Result<CourseRow, GpaError> {
        self.check_row(row)?;
        if self.rows.len() == 1 {
            return Err(GpaError::LastCourseRow);
        }
        Ok(self.rows.remove(row))
    }

    /// Overwrite the units text and grade of an existing row.
    ///
    /// # Errors
    /// * `GpaError::InvalidIndex` if `row` does not exist
    /// * `ValidationError::UnknownGrade` if `grade` is not on the active scale
    pub fn set_course(&mut self, row: usize, units: &str, grade: &str) -> Result<(), GpaError> {
        self.check_row(row)?;
        self.check_grade(grade)?;
        self.rows[row] = CourseRow::new(units.trim(), grade);
        Ok(())
    }

    /// Append a filled-in row, reusing the initial blank row when it is untouched.
    ///
    /// # Errors
    /// Returns `ValidationError::UnknownGrade` if `grade` is not on the active scale.
    pub fn push_course(&mut self, units: &str, grade: &str) -> Result<usize, GpaError> {
        self.check_grade(grade)?;
        let row = if self.rows.len() == 1 && self.rows[0].units.trim().is_empty() {
            0
        } else {
            self.add_course()
        };
        self.rows[row] = CourseRow::new(units.trim(), grade);
        Ok(row)
    }

    /// GPA of the current rows; rows without usable units are skipped
    #[must_use]
    pub fn compute_current(&self) -> GpaResult {
        compute_gpa(&self.current_courses(), self.scale)
    }

    /// Store the current rows as a semester named `name`.
    ///
    /// Rows are reset to a single blank row on success.
    ///
    /// # Errors
    /// Returns a `ValidationError` for a blank name or zero credit units;
    /// nothing changes in that case.
    pub fn store_semester(&mut self, name: &str) -> Result<usize, GpaError> {
        let semester = Semester::new(name.trim(), self.current_courses());
        let index = self.history.append(semester)?;
        self.rows = vec![CourseRow::blank(self.scale)];
        Ok(index)
    }

    /// Store a semester supplied directly, bypassing the editable rows.
    ///
    /// Courses with unusable units are dropped and every remaining grade
    /// must exist on the active scale, as it would when picked from a form.
    ///
    /// # Errors
    /// Returns a `ValidationError` when the semester fails validation.
    pub fn store_courses(&mut self, name: &str, courses: Vec<Course>) -> Result<usize, GpaError> {
        let courses: Vec<Course> = courses.into_iter().filter(Course::has_credit).collect();
        for course in &courses {
            self.check_grade(&course.grade)?;
        }
        Ok(self.history.append(Semester::new(name.trim(), courses))?)
    }

    /// Delete the stored semester at `index`.
    ///
    /// The chart selection is remapped so it keeps pointing at the same
    /// semesters: the removed index is dropped and later indices shift down.
    ///
    /// # Errors
    /// Returns `GpaError::InvalidIndex` for an out-of-range index.
    pub fn delete_semester(&mut self, index: usize) -> Result<Semester, GpaError> {
        let removed = self.history.remove_at(index)?;
        self.chart_selection = self
            .chart_selection
            .iter()
            .filter(|&&selected| selected != index)
            .map(|&selected| if selected > index { selected - 1 } else { selected })
            .collect();
        if self.history.is_empty() {
            debug!("History is now empty");
        }
        Ok(removed)
    }

    /// Switch the active scale.
    ///
    /// Stored semesters keep their letters and are re-read under the new
    /// scale. Editable rows keep their letter when the new scale has it and
    /// otherwise fall back to the new scale's top grade.
    pub fn set_scale(&mut self, scale: ScaleId) {
        if scale == self.scale {
            return;
        }
        debug!("Switching grading scale from {} to {scale}", self.scale);
        self.scale = scale;
        for row in &mut self.rows {
            if !scale.contains(&row.grade) {
                row.grade = scale.top_grade().letter.to_string();
            }
        }
    }

    /// Flip whether history entry `index` is part of the chart. Returns the new state.
    ///
    /// # Errors
    /// Returns `GpaError::InvalidIndex` when no such history entry exists.
    pub fn toggle_chart_selection(&mut self, index: usize) -> Result<bool, GpaError> {
        if self.history.get(index).is_none() {
            return Err(GpaError::InvalidIndex {
                index,
                len: self.history.len(),
            });
        }
        if self.chart_selection.remove(&index) {
            Ok(false)
        } else {
            self.chart_selection.insert(index);
            Ok(true)
        }
    }

    /// Cumulative figures over the whole history
    #[must_use]
    pub fn cumulative(&self) -> CgpaResult {
        aggregate(&self.history, self.scale)
    }

    /// Cumulative figures over the semesters selected for the chart
    #[must_use]
    pub fn aggregate_selected(&self) -> CgpaResult {
        let indices: Vec<usize> = self.chart_selection.iter().copied().collect();
        aggregate(self.history.select(&indices), self.scale)
    }

    /// Classification of the cumulative GPA
    #[must_use]
    pub fn classification(&self) -> Option<Classification> {
        classify(self.cumulative().cgpa, self.scale.max())
    }

    /// Chart series for the current selection, `None` when it should be hidden
    #[must_use]
    pub fn chart(&self) -> Option<ChartSeries> {
        build_chart(&self.history, &self.chart_selection, self.scale)
    }

    /// Snapshot of every figure a renderer displays
    #[must_use]
    pub fn summary(&self) -> Summary {
        let cumulative = self.cumulative();
        let history = self
            .history
            .iter()
            .enumerate()
            .map(|(index, semester)| {
                let gpa = semester_gpa(semester, self.scale);
                HistoryEntry {
                    index,
                    name: semester.name.clone(),
                    gpa: gpa.gpa,
                    credit_units: gpa.credit_units,
                    selected: self.chart_selection.contains(&index),
                }
            })
            .collect();

        Summary {
            scale: self.scale,
            current: self.compute_current(),
            cumulative,
            classification: classify(cumulative.cgpa, self.scale.max()),
            history,
        }
    }

    fn current_courses(&self) -> Vec<Course> {
        self.rows.iter().filter_map(CourseRow::to_course).collect()
    }

    fn check_row(&self, row: usize) -> Result<(), GpaError> {
        if row < self.rows.len() {
            Ok(())
        } else {
            Err(GpaError::InvalidIndex {
                index: row,
                len: self.rows.len(),
            })
        }
    }

    fn check_grade(&self, grade: &str) -> Result<(), ValidationError> {
        if self.scale.contains(grade) {
            Ok(())
        } else {
            Err(ValidationError::UnknownGrade {
                letter: grade.to_string(),
                scale: self.scale.to_string(),
            })
        }
    }
}
