//! Trend series for the GPA chart
//!
//! The chart itself is drawn by whichever renderer consumes the series; this
//! module only decides what to plot and whether a trend can be shown at all.

use crate::core::aggregate::semester_gpa;
use crate::core::history::SemesterHistory;
use crate::core::scale::ScaleId;

/// Fewest selected semesters that make a trend line
pub const MIN_TREND_POINTS: usize = 2;

/// Labels and per-semester GPA values for a line chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Semester names, in plot order
    pub labels: Vec<String>,
    /// Unrounded GPA per semester under the active scale
    pub values: Vec<f64>,
    /// Upper bound of the y axis (the scale maximum)
    pub y_max: f64,
}

impl ChartSeries {
    /// Number of plotted points
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(label, value)` pairs
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Build the chart series for the selected history entries.
///
/// Indices are plotted in ascending order and stale indices are ignored.
/// Returns `None` when fewer than [`MIN_TREND_POINTS`] entries remain, which
/// means the chart should be hidden.
#[must_use]
pub fn build_chart<'a, I>(history: &SemesterHistory, selected: I, scale: ScaleId) -> Option<ChartSeries>
where
    I: IntoIterator<Item = &'a usize>,
{
    let mut indices: Vec<usize> = selected.into_iter().copied().collect();
    indices.sort_unstable();
    indices.dedup();

    let (labels, values): (Vec<String>, Vec<f64>) = history
        .select(&indices)
        .into_iter()
        .map(|semester| (semester.name.clone(), semester_gpa(semester, scale).gpa))
        .unzip();

    if values.len() < MIN_TREND_POINTS {
        return None;
    }

    Some(ChartSeries {
        labels,
        values,
        y_max: scale.max(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Semester};

    fn history() -> SemesterHistory {
        let mut history = SemesterHistory::new();
        for (name, grade) in [("Y1S1", "A"), ("Y1S2", "B"), ("Y2S1", "C")] {
            history
                .append(Semester::new(name, vec![Course::new(3.0, grade)]))
                .unwrap();
        }
        history
    }

    #[test]
    fn test_fewer_than_two_points_hides_chart() {
        let history = history();
        assert!(build_chart(&history, &[], ScaleId::Four).is_none());
        assert!(build_chart(&history, &[1], ScaleId::Four).is_none());
        assert!(build_chart(&history, &[1, 9], ScaleId::Four).is_none());
    }

    #[test]
    fn test_series_in_index_order() {
        let history = history();
        let chart = build_chart(&history, &[2, 0], ScaleId::Four).unwrap();
        assert_eq!(chart.labels, vec!["Y1S1", "Y2S1"]);
        assert_eq!(chart.values, vec![4.0, 2.0]);
        assert!((chart.y_max - 4.0).abs() < f64::EPSILON);
        assert_eq!(chart.len(), 2);
    }

    #[test]
    fn test_y_max_follows_scale() {
        let history = history();
        let chart = build_chart(&history, &[0, 1], ScaleId::Seven).unwrap();
        assert!((chart.y_max - 7.0).abs() < f64::EPSILON);
        assert_eq!(chart.values, vec![7.0, 6.0]);
    }
}
