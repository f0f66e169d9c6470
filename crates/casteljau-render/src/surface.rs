//! Host-provided 2D drawing surface abstraction.

use casteljau_core::Tolerance;
use casteljau_geometry::tessellate::{curve_to_polyline, truncate_polyline};
use casteljau_geometry::BezierCurve;
use casteljau_math::Point2;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Stroke parameters for a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub width: f64,
    pub color: Color,
    /// Alternating on/off lengths; empty means a solid stroke.
    #[serde(default)]
    pub dash: Vec<f64>,
}

impl StrokeStyle {
    pub fn solid(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            dash: Vec::new(),
        }
    }

    pub fn dashed(width: f64, color: Color, dash: Vec<f64>) -> Self {
        Self { width, color, dash }
    }

    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }

    /// Same width and dash pattern in another color.
    pub fn with_color(&self, color: Color) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }
}

/// A 2D drawing target, exclusively borrowed for the duration of one draw pass.
///
/// Paths are built with `move_to`/`line_to` and consumed by `stroke_path`.
pub trait DrawSurface {
    /// Discard everything drawn so far.
    fn clear(&mut self);

    /// Begin a new subpath at `p`.
    fn move_to(&mut self, p: Point2);

    /// Extend the current subpath with a straight segment to `p`.
    fn line_to(&mut self, p: Point2);

    /// Stroke and reset the current path.
    fn stroke_path(&mut self, style: &StrokeStyle);

    /// Fill a circular point marker.
    fn fill_circle(&mut self, center: Point2, radius: f64, color: Color);

    /// Stroke the Bezier curve defined by `control_points`, revealing only the
    /// first `reveal` fraction (`0..=1`) of its length.
    ///
    /// Surfaces with a native curve primitive override this. The default
    /// flattens the curve and strokes the truncated polyline.
    fn stroke_curve_reveal(&mut self, control_points: &[Point2], reveal: f64, style: &StrokeStyle) {
        stroke_flattened_reveal(self, control_points, reveal, style);
    }
}

/// Stroke `points` as a single open polyline. Fewer than two points draw nothing.
pub fn stroke_polyline<S: DrawSurface + ?Sized>(surface: &mut S, points: &[Point2], style: &StrokeStyle) {
    let [first, rest @ ..] = points else {
        return;
    };
    if rest.is_empty() {
        return;
    }

    surface.move_to(*first);
    for &p in rest {
        surface.line_to(p);
    }
    surface.stroke_path(style);
}

/// Flatten the curve on `control_points` and stroke the part up to the
/// arc-length fraction `reveal`.
pub fn stroke_flattened_reveal<S: DrawSurface + ?Sized>(
    surface: &mut S,
    control_points: &[Point2],
    reveal: f64,
    style: &StrokeStyle,
) {
    let curve = match BezierCurve::new(control_points.to_vec()) {
        Ok(curve) => curve,
        Err(e) => {
            log::debug!("Skipping curve reveal: {}", e);
            return;
        }
    };

    let flattened = curve_to_polyline(&curve, Tolerance::default().flatten);
    let visible = truncate_polyline(&flattened, reveal);
    stroke_polyline(surface, &visible, style);
}
