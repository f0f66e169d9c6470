//! Tessellation utilities for converting curves to polylines.

use casteljau_math::{lerp, Point2};

use crate::curve::Curve;

/// Sample `curve` from the start of its domain up to `t_end` in fixed steps.
///
/// Samples are taken at `t_min + k * step` for every `k >= 1` that stays
/// below `t_end`, followed by the exact point at `t_end`. `t_end` is clamped
/// to the domain. When `t_end` equals the domain start the result is the
/// single start point.
///
/// # Arguments
/// * `curve` - The curve to trace
/// * `t_end` - Parameter at which the trace stops
/// * `step` - Fixed parameter increment, must be positive
pub fn trace_polyline(curve: &dyn Curve, t_end: f64, step: f64) -> Vec<Point2> {
    debug_assert!(step > 0.0, "trace step must be positive");

    let (t_min, t_max) = curve.domain();
    let t_end = t_end.clamp(t_min, t_max);

    let mut points = vec![curve.point_at(t_min)];
    let mut k = 1usize;
    loop {
        let t = t_min + k as f64 * step;
        if t >= t_end {
            break;
        }
        points.push(curve.point_at(t));
        k += 1;
    }
    if t_end > t_min {
        points.push(curve.point_at(t_end));
    }
    points
}

/// Convert a curve to a polyline using adaptive subdivision.
///
/// The algorithm recursively subdivides segments where the midpoint deviation
/// from the chord exceeds the given `tolerance`.
pub fn curve_to_polyline(curve: &dyn Curve, tolerance: f64) -> Vec<Point2> {
    let (t_min, t_max) = curve.domain();
    let mut points = Vec::new();
    points.push(curve.point_at(t_min));
    subdivide_curve(curve, t_min, t_max, tolerance, &mut points, 0);
    points
}

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Depth below which segments are always split, so that S-shaped spans whose
/// midpoint happens to sit on the chord are not taken as flat.
const MIN_DEPTH: u32 = 2;

fn subdivide_curve(
    curve: &dyn Curve,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<Point2>,
    depth: u32,
) {
    if depth >= MAX_DEPTH {
        points.push(curve.point_at(t1));
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.point_at(t0);
    let p1 = curve.point_at(t1);
    let p_mid = curve.point_at(t_mid);

    let chord_mid = (p0 + p1) * 0.5;
    let deviation = (p_mid - chord_mid).length();

    if depth < MIN_DEPTH || deviation > tolerance {
        subdivide_curve(curve, t0, t_mid, tolerance, points, depth + 1);
        subdivide_curve(curve, t_mid, t1, tolerance, points, depth + 1);
    } else {
        points.push(p1);
    }
}

/// Total length of a polyline.
pub fn polyline_length(points: &[Point2]) -> f64 {
    points.windows(2).map(|pair| pair[0].distance(pair[1])).sum()
}

/// Cut a polyline at a normalized arc-length `fraction` in `[0, 1]`.
///
/// The result starts at the first point and ends exactly at the point lying
/// `fraction` of the way along the polyline. A fraction of zero keeps only
/// the first point.
pub fn truncate_polyline(points: &[Point2], fraction: f64) -> Vec<Point2> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };

    let fraction = fraction.clamp(0.0, 1.0);
    let target = polyline_length(points) * fraction;
    if fraction >= 1.0 {
        return points.to_vec();
    }

    let mut result = vec![first];
    if target <= 0.0 {
        return result;
    }

    let mut walked = 0.0;
    for pair in points.windows(2) {
        let segment = pair[0].distance(pair[1]);
        if walked + segment >= target {
            let local = if segment > 0.0 {
                (target - walked) / segment
            } else {
                0.0
            };
            result.push(lerp(pair[0], pair[1], local));
            return result;
        }
        walked += segment;
        result.push(pair[1]);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::BezierCurve;
    use approx::assert_abs_diff_eq;
    use casteljau_math::DVec2;

    fn arch() -> BezierCurve {
        BezierCurve::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 100.0),
            DVec2::new(100.0, 100.0),
            DVec2::new(100.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_trace_full_curve() {
        let curve = arch();
        let points = trace_polyline(&curve, 1.0, 0.25);
        // t = 0, 0.25, 0.5, 0.75, then the exact end
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], curve.point_at(0.0));
        assert_eq!(points[4], curve.point_at(1.0));
    }

    #[test]
    fn test_trace_stops_at_t() {
        let curve = arch();
        let points = trace_polyline(&curve, 0.6, 0.25);
        assert_eq!(points.len(), 4);
        assert_eq!(points[3], curve.point_at(0.6));
    }

    #[test]
    fn test_trace_at_zero_is_start_only() {
        let curve = arch();
        let points = trace_polyline(&curve, 0.0, 0.025);
        assert_eq!(points, vec![curve.point_at(0.0)]);
    }

    #[test]
    fn test_trace_clamps_to_domain() {
        let curve = arch();
        let points = trace_polyline(&curve, 3.0, 0.5);
        assert_eq!(points.last().copied(), Some(curve.point_at(1.0)));
    }

    #[test]
    fn test_curve_to_polyline_line() {
        let line = BezierCurve::new(vec![DVec2::ZERO, DVec2::new(10.0, 0.0)]).unwrap();
        let points = curve_to_polyline(&line, 0.01);
        // Always split down to MIN_DEPTH, never beyond for a straight line
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], DVec2::ZERO);
        assert_eq!(points[4], DVec2::new(10.0, 0.0));
    }

    #[test]
    fn test_curve_to_polyline_stays_near_curve() {
        let curve = arch();
        let points = curve_to_polyline(&curve, 0.1);
        assert!(points.len() > 10, "expected refinement, got {}", points.len());
        assert_eq!(points[points.len() - 1], curve.point_at(1.0));
        // Peak of the arch is 75 units high
        let top = points.iter().map(|p| p.y).fold(f64::MIN, f64::max);
        assert_abs_diff_eq!(top, 75.0, epsilon = 0.5);
    }

    #[test]
    fn test_truncate_half_of_straight_polyline() {
        let pts = vec![DVec2::ZERO, DVec2::new(4.0, 0.0), DVec2::new(4.0, 4.0)];
        let half = truncate_polyline(&pts, 0.5);
        assert_eq!(half, vec![DVec2::ZERO, DVec2::new(4.0, 0.0)]);

        let quarter = truncate_polyline(&pts, 0.25);
        assert_eq!(quarter.len(), 2);
        assert_abs_diff_eq!(quarter[1].x, 2.0);
        assert_abs_diff_eq!(polyline_length(&quarter), 2.0);
    }

    #[test]
    fn test_truncate_bounds() {
        let pts = vec![DVec2::ZERO, DVec2::new(1.0, 0.0)];
        assert_eq!(truncate_polyline(&pts, 0.0), vec![DVec2::ZERO]);
        assert_eq!(truncate_polyline(&pts, 1.0), pts);
        assert_eq!(truncate_polyline(&pts, 7.0), pts);
        assert!(truncate_polyline(&[], 0.5).is_empty());
    }
}
