//! Transcript input files
//!
//! A transcript is a TOML document listing semesters and their courses. It is
//! only ever read: loading replays each semester through the same validation
//! a front end applies when the user presses "store".
//!
//! ```toml
//! scale = "4.0"
//!
//! [[semesters]]
//! name = "Fall 2024"
//! courses = [
//!     { units = 3, grade = "A" },
//!     { units = "1.5", grade = "B" },
//! ]
//! ```

use crate::core::error::GpaError;
use crate::core::models::Course;
use crate::core::scale::ScaleId;
use crate::core::session::Session;
use crate::shared::numeric::parse_units;
use crate::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Units as written in a transcript: a bare number or form-style text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UnitsField {
    /// Numeric literal
    Number(f64),
    /// Text, parsed like a form input
    Text(String),
}

impl UnitsField {
    /// Numeric value, if the field reads as a finite number
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n).filter(|n| n.is_finite()),
            Self::Text(text) => parse_units(text),
        }
    }
}

/// One course line of a transcript
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranscriptCourse {
    /// Credit units
    pub units: UnitsField,
    /// Grade letter
    pub grade: String,
}

/// One semester of a transcript
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranscriptSemester {
    /// Semester name
    pub name: String,
    /// Courses in entry order
    #[serde(default)]
    pub courses: Vec<TranscriptCourse>,
}

/// A parsed transcript file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transcript {
    /// Scale the grades were recorded under (e.g. "5.0")
    #[serde(default)]
    pub scale: Option<String>,
    /// Semesters in display order
    #[serde(default)]
    pub semesters: Vec<TranscriptSemester>,
}

impl Transcript {
    /// Parse a transcript from TOML text
    ///
    /// # Errors
    /// Returns `GpaError::Transcript` if the text is not valid TOML or does
    /// not match the transcript layout.
    pub fn from_toml(toml_str: &str) -> Result<Self, GpaError> {
        toml::from_str(toml_str).map_err(|e| GpaError::Transcript(e.to_string()))
    }

    /// Read and parse a transcript file
    ///
    /// # Errors
    /// Returns `GpaError::Io` if the file cannot be read or
    /// `GpaError::Transcript` if it cannot be parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GpaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let transcript = Self::from_toml(&content)?;
        info!(
            "Loaded transcript {} ({} semesters)",
            path.display(),
            transcript.semesters.len()
        );
        Ok(transcript)
    }

    /// Scale declared by the transcript, if any
    ///
    /// # Errors
    /// Returns `GpaError::UnknownScale` for an unsupported identifier.
    pub fn declared_scale(&self) -> Result<Option<ScaleId>, GpaError> {
        self.scale.as_deref().map(str::parse).transpose()
    }

    /// Replay the transcript into a fresh session.
    ///
    /// Semesters are stored under the declared scale (or `fallback` when the
    /// transcript names none), so grades are validated against the scale they
    /// were recorded on. Courses whose units are missing or non-positive are
    /// skipped as incomplete.
    ///
    /// # Errors
    /// Fails on the first semester that does not validate, naming it.
    pub fn into_session(self, fallback: ScaleId) -> Result<Session, GpaError> {
        let scale = self.declared_scale()?.unwrap_or(fallback);
        let mut session = Session::new(scale);

        for (position, semester) in self.semesters.into_iter().enumerate() {
            let courses: Vec<Course> = semester
                .courses
                .iter()
                .filter_map(|c| c.units.value().map(|units| Course::new(units, c.grade.trim())))
                .collect();
            session
                .store_courses(&semester.name, courses)
                .map_err(|e| {
                    GpaError::Transcript(format!(
                        "semester {} ('{}'): {e}",
                        position + 1,
                        semester.name
                    ))
                })?;
            debug!("Replayed semester '{}'", semester.name);
        }

        Ok(session)
    }
}
