//! Pure SVG geometry for the dashboard charts. No DOM access, so the math is
//! testable off the browser.

/// Points of an SVG `<polyline>` for one series, scaled to `width` × `height`
/// with `max` as the top of the value axis. A single-point series pins to the
/// left edge; a non-positive max flattens the line on the baseline.
pub fn polyline_points(values: &[f64], max: f64, width: f64, height: f64) -> String {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if n > 1 {
                i as f64 * width / (n - 1) as f64
            } else {
                0.0
            };
            let ratio = if max > 0.0 { (v / max).clamp(0.0, 1.0) } else { 0.0 };
            let y = height - ratio * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One doughnut slice as fractions of the full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSegment {
    /// Share of the circle, 0..=1.
    pub fraction: f64,
    /// Where the slice starts, 0..=1, accumulated clockwise.
    pub offset: f64,
}

/// Splits the circle proportionally to `values`. Non-positive values produce
/// empty slices (kept, so indices line up with the legend); an all-zero input
/// produces no slices at all.
pub fn donut_segments(values: &[f64]) -> Vec<DonutSegment> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut offset = 0.0;
    values
        .iter()
        .map(|v| {
            let fraction = if *v > 0.0 { v / total } else { 0.0 };
            let seg = DonutSegment { fraction, offset };
            offset += fraction;
            seg
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_spreads_over_width() {
        let pts = polyline_points(&[0.0, 50.0, 100.0], 100.0, 200.0, 100.0);
        assert_eq!(pts, "0.0,100.0 100.0,50.0 200.0,0.0");
    }

    #[test]
    fn test_polyline_single_point_and_zero_max() {
        assert_eq!(polyline_points(&[42.0], 100.0, 200.0, 100.0), "0.0,58.0");
        assert_eq!(polyline_points(&[42.0], 0.0, 200.0, 100.0), "0.0,100.0");
        assert_eq!(polyline_points(&[], 100.0, 200.0, 100.0), "");
    }

    #[test]
    fn test_donut_fractions_sum_to_one() {
        let segs = donut_segments(&[1.0, 3.0]);
        assert_eq!(segs.len(), 2);
        assert!((segs[0].fraction - 0.25).abs() < 1e-9);
        assert!((segs[1].fraction - 0.75).abs() < 1e-9);
        assert!((segs[1].offset - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_donut_ignores_non_positive_values() {
        let segs = donut_segments(&[2.0, 0.0, -1.0, 2.0]);
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[1].fraction, 0.0);
        assert_eq!(segs[2].fraction, 0.0);
        assert!((segs[3].offset - 0.5).abs() < 1e-9);

        assert!(donut_segments(&[0.0, 0.0]).is_empty());
        assert!(donut_segments(&[]).is_empty());
    }
}
