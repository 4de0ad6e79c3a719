//! Inline SVG geometry for the HTML trend chart

use crate::core::chart::ChartSeries;
use crate::shared::numeric::fmt2;

/// Canvas width in SVG units
pub const WIDTH: f64 = 640.0;
/// Canvas height in SVG units
pub const HEIGHT: f64 = 280.0;
/// Margin around the plot area
pub const PADDING: f64 = 40.0;

/// A plotted point, pre-formatted for templating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgPoint {
    /// X coordinate
    pub x: String,
    /// Y coordinate
    pub y: String,
    /// Semester name
    pub label: String,
    /// GPA shown next to the point
    pub value: String,
}

/// Line chart laid out on a fixed canvas, y axis from 0 to the scale maximum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgLineChart {
    /// `points` attribute for the polyline
    pub polyline: String,
    /// Individual points in plot order
    pub points: Vec<SvgPoint>,
    /// Label for the top of the y axis
    pub y_max: String,
}

impl SvgLineChart {
    /// Lay out `series` on the canvas
    #[must_use]
    pub fn from_series(series: &ChartSeries) -> Self {
        let plot_w = 2.0f64.mul_add(-PADDING, WIDTH);
        let plot_h = 2.0f64.mul_add(-PADDING, HEIGHT);
        let steps = series.len().saturating_sub(1).max(1);
        let step = plot_w / f64::from(u32::try_from(steps).unwrap_or(u32::MAX));

        let points: Vec<SvgPoint> = series
            .points()
            .enumerate()
            .map(|(i, (label, value))| {
                let i = f64::from(u32::try_from(i).unwrap_or(u32::MAX));
                let ratio = if series.y_max > 0.0 {
                    (value / series.y_max).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                SvgPoint {
                    x: format!("{:.1}", i.mul_add(step, PADDING)),
                    y: format!("{:.1}", ratio.mul_add(-plot_h, HEIGHT - PADDING)),
                    label: label.to_string(),
                    value: fmt2(value),
                }
            })
            .collect();

        let polyline = points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            polyline,
            points,
            y_max: format!("{:.1}", series.y_max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_spans_plot_area() {
        let series = ChartSeries {
            labels: vec!["A".into(), "B".into(), "C".into()],
            values: vec![4.0, 2.0, 0.0],
            y_max: 4.0,
        };
        let chart = SvgLineChart::from_series(&series);

        assert_eq!(chart.points.len(), 3);
        assert_eq!(chart.points[0].x, "40.0");
        assert_eq!(chart.points[0].y, "40.0");
        assert_eq!(chart.points[1].x, "320.0");
        assert_eq!(chart.points[1].y, "140.0");
        assert_eq!(chart.points[2].x, "600.0");
        assert_eq!(chart.points[2].y, "240.0");
        assert_eq!(chart.polyline, "40.0,40.0 320.0,140.0 600.0,240.0");
        assert_eq!(chart.y_max, "4.0");
    }
}
