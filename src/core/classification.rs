//! Degree classification from a cumulative GPA

use std::fmt;

/// Honours bands, normalised to a 4.0-equivalent CGPA
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Normalised CGPA >= 3.50
    FirstClass,
    /// Normalised CGPA >= 3.00
    SecondClassUpper,
    /// Normalised CGPA >= 2.00
    SecondClassLower,
    /// Normalised CGPA >= 1.00
    ThirdClass,
    /// Anything below
    Fail,
}

/// Lower bounds, highest first; the first bound met wins.
const THRESHOLDS: [(f64, Classification); 4] = [
    (3.50, Classification::FirstClass),
    (3.00, Classification::SecondClassUpper),
    (2.00, Classification::SecondClassLower),
    (1.00, Classification::ThirdClass),
];

impl Classification {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstClass => "First Class Honours",
            Self::SecondClassUpper => "Second Class Honours (Upper Division)",
            Self::SecondClassLower => "Second Class Honours (Lower Division)",
            Self::ThirdClass => "Third Class Honours",
            Self::Fail => "Fail",
        }
    }

    /// Band for a CGPA already normalised to the 4.0 scale
    #[must_use]
    pub fn from_normalized(normalized: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(bound, _)| normalized >= *bound)
            .map_or(Self::Fail, |&(_, class)| class)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify `cgpa` earned on a scale whose maximum is `scale_max`.
///
/// Returns `None` when there is nothing to classify: a non-positive or
/// non-finite CGPA, or a non-positive scale maximum.
#[must_use]
pub fn classify(cgpa: f64, scale_max: f64) -> Option<Classification> {
    if cgpa <= 0.0 || !cgpa.is_finite() || scale_max <= 0.0 {
        return None;
    }
    let normalized = (cgpa / scale_max) * 4.0;
    Some(Classification::from_normalized(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_on_four_point_scale() {
        assert_eq!(classify(4.0, 4.0), Some(Classification::FirstClass));
        assert_eq!(classify(3.2, 4.0), Some(Classification::SecondClassUpper));
        assert_eq!(classify(3.0, 4.0), Some(Classification::SecondClassUpper));
        assert_eq!(classify(2.75, 4.0), Some(Classification::SecondClassLower));
        assert_eq!(classify(2.5, 4.0), Some(Classification::SecondClassLower));
        assert_eq!(classify(1.5, 4.0), Some(Classification::ThirdClass));
        assert_eq!(classify(0.5, 4.0), Some(Classification::Fail));
    }

    #[test]
    fn test_lower_bounds_are_closed() {
        assert_eq!(
            Classification::from_normalized(3.50),
            Classification::FirstClass
        );
        assert_eq!(
            Classification::from_normalized(3.4999),
            Classification::SecondClassUpper
        );
        assert_eq!(
            Classification::from_normalized(3.00),
            Classification::SecondClassUpper
        );
        assert_eq!(
            Classification::from_normalized(2.00),
            Classification::SecondClassLower
        );
        assert_eq!(
            Classification::from_normalized(1.00),
            Classification::ThirdClass
        );
        assert_eq!(Classification::from_normalized(0.99), Classification::Fail);
    }

    #[test]
    fn test_normalises_other_scales() {
        // 8.75 / 10 * 4 = 3.5
        assert_eq!(classify(8.75, 10.0), Some(Classification::FirstClass));
        // 3.5 / 7 * 4 = 2.0
        assert_eq!(classify(3.5, 7.0), Some(Classification::SecondClassLower));
        // 3.75 / 5 * 4 = 3.0
        assert_eq!(classify(3.75, 5.0), Some(Classification::SecondClassUpper));
    }

    #[test]
    fn test_nothing_to_classify() {
        assert_eq!(classify(0.0, 4.0), None);
        assert_eq!(classify(-1.0, 4.0), None);
        assert_eq!(classify(f64::NAN, 4.0), None);
        assert_eq!(classify(f64::INFINITY, 4.0), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            Classification::SecondClassUpper.to_string(),
            "Second Class Honours (Upper Division)"
        );
        assert_eq!(Classification::Fail.label(), "Fail");
    }
}
