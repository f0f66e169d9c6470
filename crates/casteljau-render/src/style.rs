//! Visual parameters of the construction rendering.

use casteljau_core::traits::Validate;
use casteljau_core::{CasteljauError, Result};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::palette::LevelPalette;
use crate::surface::StrokeStyle;

/// Parameter step between samples of the traced curve.
pub const TRACE_STEP: f64 = 0.025;

/// Smallest accepted trace step; 10 000 samples across the whole curve.
pub const MIN_TRACE_STEP: f64 = 1e-4;

/// Colors, widths, and radii used by [`CurveRenderer`](crate::CurveRenderer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Control polygon (level 0)
    pub polygon: StrokeStyle,
    /// Segments of interpolated levels; the color is replaced by the level color
    pub level_segments: StrokeStyle,
    pub endpoint_color: Color,
    pub endpoint_radius: f64,
    pub control_color: Color,
    pub control_radius: f64,
    pub level_point_radius: f64,
    /// Marker of the point on the curve (the final level)
    pub curve_point_radius: f64,
    pub palette: LevelPalette,
    pub trace: StrokeStyle,
    pub trace_step: f64,
    /// Native smooth-curve overlay
    pub native_curve: StrokeStyle,
    /// Start-to-end line drawn while the cubic controls are incomplete
    pub straight_line: StrokeStyle,
}

impl RenderStyle {
    /// Style for any number of control points: translucent gray levels.
    pub fn generalized() -> Self {
        Self {
            polygon: StrokeStyle::dashed(3.0, Color::LIGHT_GRAY, vec![2.0]),
            level_segments: StrokeStyle::dashed(3.0, Color::LIGHT_GRAY, vec![2.0]),
            endpoint_color: Color::RED,
            endpoint_radius: 12.0,
            control_color: Color::MAGENTA,
            control_radius: 4.0,
            level_point_radius: 5.0,
            curve_point_radius: 7.0,
            palette: LevelPalette::grayscale(),
            trace: StrokeStyle::solid(4.0, Color::ORANGE),
            trace_step: TRACE_STEP,
            native_curve: StrokeStyle::solid(4.0, Color::ORANGE),
            straight_line: StrokeStyle::solid(4.0, Color::BLUE),
        }
    }

    /// Style of the classic four-point construction: green, cyan, orange.
    pub fn cubic() -> Self {
        Self {
            polygon: StrokeStyle::dashed(4.0, Color::LIGHT_GRAY, vec![2.0]),
            level_segments: StrokeStyle::dashed(2.0, Color::GREEN, vec![2.0]),
            control_color: Color::DARK_GRAY,
            control_radius: 8.0,
            level_point_radius: 7.0,
            curve_point_radius: 5.0,
            palette: LevelPalette::cubic(),
            ..Self::generalized()
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::generalized()
    }
}

impl Validate for RenderStyle {
    fn validate(&self) -> Result<()> {
        if !(self.trace_step >= MIN_TRACE_STEP && self.trace_step <= 1.0) {
            return Err(CasteljauError::Config(format!(
                "trace_step must be in [{}, 1], got {}",
                MIN_TRACE_STEP, self.trace_step
            )));
        }

        let radii = [
            ("endpoint_radius", self.endpoint_radius),
            ("control_radius", self.control_radius),
            ("level_point_radius", self.level_point_radius),
            ("curve_point_radius", self.curve_point_radius),
        ];
        for (name, radius) in radii {
            if !(radius >= 0.0 && radius.is_finite()) {
                return Err(CasteljauError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, radius
                )));
            }
        }

        let strokes = [
            ("polygon", &self.polygon),
            ("level_segments", &self.level_segments),
            ("trace", &self.trace),
            ("native_curve", &self.native_curve),
            ("straight_line", &self.straight_line),
        ];
        for (name, stroke) in strokes {
            if !(stroke.width > 0.0 && stroke.width.is_finite()) {
                return Err(CasteljauError::Config(format!(
                    "{} stroke width must be positive, got {}",
                    name, stroke.width
                )));
            }
            if stroke.dash.iter().any(|&d| !(d >= 0.0 && d.is_finite())) {
                return Err(CasteljauError::Config(format!(
                    "{} dash lengths must be non-negative",
                    name
                )));
            }
        }

        self.palette.validate()
    }
}
