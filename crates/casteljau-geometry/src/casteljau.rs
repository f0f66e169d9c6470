//! De Casteljau reduction for Bezier curves with any number of control points.

use casteljau_math::{lerp, Point2, Vector2};

/// Every intermediate reduction level, from the input sequence down to the
/// single point on the curve.
pub type Levels = Vec<Vec<Point2>>;

/// One reduction step: lerp every adjacent pair of `points` at `t`.
///
/// The result is one element shorter than the input. Inputs with fewer than
/// two points reduce to an empty sequence.
pub fn reduce(points: &[Point2], t: f64) -> Vec<Point2> {
    points
        .windows(2)
        .map(|pair| lerp(pair[0], pair[1], t))
        .collect()
}

/// Evaluate the Bezier curve defined by `points` at parameter `t`.
///
/// `evaluate([p], t) = p`, and a longer sequence evaluates to the same point
/// as its one-step reduction at `t`.
///
/// # Panics
/// Panics if `points` is empty.
pub fn evaluate(points: &[Point2], t: f64) -> Point2 {
    assert!(
        !points.is_empty(),
        "De Casteljau evaluation needs at least one control point"
    );

    if points.len() == 1 {
        return points[0];
    }

    evaluate(&reduce(points, t), t)
}

/// Collect every reduction level of `points` at `t`.
///
/// Level 0 is a copy of `points` and level `k` is the result of `k`
/// reductions, so there are exactly `points.len()` levels and the last one
/// holds the single curve point.
///
/// # Panics
/// Panics if `points` is empty.
pub fn evaluate_levels(points: &[Point2], t: f64) -> Levels {
    assert!(
        !points.is_empty(),
        "De Casteljau evaluation needs at least one control point"
    );

    let mut levels = Vec::with_capacity(points.len());
    let mut current = points.to_vec();
    while current.len() > 1 {
        let next = reduce(&current, t);
        levels.push(current);
        current = next;
    }
    levels.push(current);
    levels
}

/// Control points of the derivative curve.
///
/// For `n + 1` control points the hodograph has `n` points
/// `n * (p[i + 1] - p[i])`. A single point has no derivative and yields an
/// empty sequence.
pub fn hodograph(points: &[Point2]) -> Vec<Vector2> {
    let n = points.len().saturating_sub(1) as f64;
    points.windows(2).map(|pair| n * (pair[1] - pair[0])).collect()
}
