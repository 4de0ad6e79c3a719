//! Numeric helpers for presenting grade figures

/// Tolerance used when comparing accumulated grade figures
pub const EPSILON: f64 = 1e-9;

/// Round `value` to two decimal places.
///
/// Only used at the presentation edge; accumulation always works on the
/// unrounded figures.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a GPA-like figure with exactly two decimals (e.g. `3.50`)
#[must_use]
pub fn fmt2(value: f64) -> String {
    format!("{value:.2}")
}

/// Parse a units field the way a numeric form input is read.
///
/// Returns `None` for blank, non-numeric or non-finite input. Sign is not
/// checked here; callers decide whether non-positive units are usable.
#[must_use]
pub fn parse_units(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|units| units.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert!((round2(3.456) - 3.46).abs() < EPSILON);
        assert!((round2(2.0) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_fmt2() {
        assert_eq!(fmt2(3.5), "3.50");
        assert_eq!(fmt2(0.0), "0.00");
        assert_eq!(fmt2(2.746), "2.75");
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units(" 3 "), Some(3.0));
        assert_eq!(parse_units("1.5"), Some(1.5));
        assert_eq!(parse_units("-2"), Some(-2.0));
        assert_eq!(parse_units(""), None);
        assert_eq!(parse_units("three"), None);
        assert_eq!(parse_units("NaN"), None);
        assert_eq!(parse_units("inf"), None);
    }
}
