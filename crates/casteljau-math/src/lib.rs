pub mod aabb;

pub use glam::{dvec2, DVec2};
pub use aabb::Aabb2;

pub type Point2 = DVec2;
pub type Vector2 = DVec2;

/// Affine combination `(1 - t) * a + t * b`, evaluated componentwise.
///
/// `t` is not restricted; values outside `[0, 1]` extrapolate along the
/// line through `a` and `b`.
pub fn lerp(a: Point2, b: Point2, t: f64) -> Point2 {
    DVec2::new((1.0 - t) * a.x + t * b.x, (1.0 - t) * a.y + t * b.y)
}

/// Clamp a curve parameter to `[0, 1]`.
///
/// Returns `None` for NaN, which has no meaningful position on the curve.
pub fn clamp_unit(t: f64) -> Option<f64> {
    if t.is_nan() {
        None
    } else {
        Some(t.clamp(0.0, 1.0))
    }
}

/// Whether both components are finite.
pub fn is_finite_point(p: Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
