//! Grade scale registry
//!
//! A closed set of grading scales, each an ordered table of letter grades
//! from best to worst. Tables are static and never mutated.

use crate::core::error::GpaError;
use std::fmt;
use std::str::FromStr;

/// A single letter grade and its numeric value on a scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradePoint {
    /// Letter shown to the user (e.g. "A", "B+")
    pub letter: &'static str,
    /// Numeric grade value
    pub value: f64,
}

const fn gp(letter: &'static str, value: f64) -> GradePoint {
    GradePoint { letter, value }
}

const SCALE_4: &[GradePoint] = &[
    gp("A", 4.0),
    gp("B", 3.0),
    gp("C", 2.0),
    gp("D", 1.0),
    gp("F", 0.0),
];

const SCALE_5: &[GradePoint] = &[
    gp("A", 5.0),
    gp("B", 4.0),
    gp("C", 3.0),
    gp("D", 2.0),
    gp("E", 1.0),
    gp("F", 0.0),
];

const SCALE_7: &[GradePoint] = &[
    gp("A", 7.0),
    gp("B", 6.0),
    gp("C", 5.0),
    gp("D", 4.0),
    gp("E", 3.0),
    gp("F", 0.0),
];

const SCALE_10: &[GradePoint] = &[
    gp("O", 10.0),
    gp("A+", 9.0),
    gp("A", 8.0),
    gp("B+", 7.0),
    gp("B", 6.0),
    gp("C", 5.0),
    gp("F", 0.0),
];

/// Identifier of a supported grading scale, named by its maximum value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleId {
    /// 4.0 scale (A-F)
    #[default]
    Four,
    /// 5.0 scale (A-F with E)
    Five,
    /// 7.0 scale (A-F with E)
    Seven,
    /// 10.0 scale (O, A+ ... F)
    Ten,
}

impl ScaleId {
    /// Every supported scale, in ascending order of maximum
    pub const ALL: [Self; 4] = [Self::Four, Self::Five, Self::Seven, Self::Ten];

    /// Maximum grade value, also used as the scale's identifier
    #[must_use]
    pub const fn max(self) -> f64 {
        match self {
            Self::Four => 4.0,
            Self::Five => 5.0,
            Self::Seven => 7.0,
            Self::Ten => 10.0,
        }
    }

    /// Ordered grade table for this scale
    #[must_use]
    pub const fn grades(self) -> &'static [GradePoint] {
        lookup(self)
    }

    /// Best grade on the scale (first entry of the table)
    #[must_use]
    pub const fn top_grade(self) -> GradePoint {
        self.grades()[0]
    }

    /// Smallest numeric value on the scale
    #[must_use]
    pub fn min_value(self) -> f64 {
        self.grades()
            .iter()
            .map(|g| g.value)
            .fold(f64::INFINITY, f64::min)
    }

    /// Whether `letter` is a grade on this scale (exact match)
    #[must_use]
    pub fn contains(self, letter: &str) -> bool {
        self.grades().iter().any(|g| g.letter == letter)
    }

    /// Letters in table order
    #[must_use]
    pub fn letters(self) -> Vec<&'static str> {
        self.grades().iter().map(|g| g.letter).collect()
    }
}

impl fmt::Display for ScaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.max())
    }
}

impl FromStr for ScaleId {
    type Err = GpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4" | "4.0" => Ok(Self::Four),
            "5" | "5.0" => Ok(Self::Five),
            "7" | "7.0" => Ok(Self::Seven),
            "10" | "10.0" => Ok(Self::Ten),
            other => Err(GpaError::UnknownScale(other.to_string())),
        }
    }
}

/// Look up the ordered grade table for a scale
#[must_use]
pub const fn lookup(scale: ScaleId) -> &'static [GradePoint] {
    match scale {
        ScaleId::Four => SCALE_4,
        ScaleId::Five => SCALE_5,
        ScaleId::Seven => SCALE_7,
        ScaleId::Ten => SCALE_10,
    }
}

/// Look up a grade table by its textual identifier (e.g. "7.0")
///
/// # Errors
/// Returns `GpaError::UnknownScale` if the identifier is not one of the
/// supported scales.
pub fn lookup_str(scale: &str) -> Result<&'static [GradePoint], GpaError> {
    scale.parse::<ScaleId>().map(lookup)
}

/// Numeric value of `letter` on `scale`.
///
/// Letters missing from the scale are worth 0, so aggregation stays defined
/// when history recorded under one scale is read under another.
#[must_use]
pub fn grade_value(scale: ScaleId, letter: &str) -> f64 {
    lookup(scale)
        .iter()
        .find(|g| g.letter == letter)
        .map_or(0.0, |g| g.value)
}
