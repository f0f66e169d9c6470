//! Bezier curve of arbitrary degree, evaluated by De Casteljau reduction.

use casteljau_core::traits::Validate;
use casteljau_core::{CasteljauError, Result};
use casteljau_math::{is_finite_point, Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::Curve;
use crate::casteljau::{self, Levels};

/// A Bezier curve defined by an ordered sequence of at least two control points.
///
/// Two control points give a straight line, three a quadratic, four a cubic,
/// and so on. The curve passes through the first and last control point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point2>", into = "Vec<Point2>")]
pub struct BezierCurve {
    control_points: Vec<Point2>,
}

impl BezierCurve {
    pub fn new(control_points: Vec<Point2>) -> Result<Self> {
        let curve = Self { control_points };
        curve.validate()?;
        Ok(curve)
    }

    pub fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    pub fn start(&self) -> Point2 {
        self.control_points[0]
    }

    pub fn end(&self) -> Point2 {
        self.control_points[self.control_points.len() - 1]
    }

    /// Polynomial degree: one less than the number of control points.
    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    /// Every De Casteljau reduction level at `t`, from the control points
    /// down to the curve point.
    pub fn levels(&self, t: f64) -> Levels {
        casteljau::evaluate_levels(&self.control_points, t)
    }
}

impl Curve for BezierCurve {
    fn point_at(&self, t: f64) -> Point2 {
        casteljau::evaluate(&self.control_points, t)
    }

    fn tangent_at(&self, t: f64) -> Vector2 {
        casteljau::evaluate(&casteljau::hodograph(&self.control_points), t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

impl Validate for BezierCurve {
    fn validate(&self) -> Result<()> {
        if self.control_points.len() < 2 {
            return Err(CasteljauError::Geometry(format!(
                "A Bezier curve requires at least 2 control points, got {}",
                self.control_points.len()
            )));
        }
        if let Some(index) = self.control_points.iter().position(|&p| !is_finite_point(p)) {
            return Err(CasteljauError::Geometry(format!(
                "Control point {} is not finite",
                index
            )));
        }
        Ok(())
    }
}

impl TryFrom<Vec<Point2>> for BezierCurve {
    type Error = CasteljauError;

    fn try_from(control_points: Vec<Point2>) -> Result<Self> {
        Self::new(control_points)
    }
}

impl From<BezierCurve> for Vec<Point2> {
    fn from(curve: BezierCurve) -> Self {
        curve.control_points
    }
}
