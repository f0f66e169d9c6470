//! Draws a De Casteljau construction: control polygon, every interpolation
//! level, the traced curve, and an optional native curve overlay.
//!
//! Nothing is cached between calls. Each `render` re-evaluates the whole
//! construction from the control points and `t` it is given.

use casteljau_core::{CasteljauError, Result};
use casteljau_geometry::tessellate::trace_polyline;
use casteljau_geometry::BezierCurve;
use casteljau_math::{clamp_unit, Point2};
use serde::{Deserialize, Serialize};

use crate::style::RenderStyle;
use crate::surface::{stroke_polyline, DrawSurface};

/// Which optional layers a draw pass includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayMode {
    /// Control polygon and interpolation levels
    pub show_construction: bool,
    /// Fixed-step polyline of the curve from 0 to `t`
    pub show_trace: bool,
    /// Native smooth curve revealed up to `t`
    pub show_native_curve: bool,
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self {
            show_construction: true,
            show_trace: true,
            show_native_curve: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CurveRenderer {
    style: RenderStyle,
}

impl CurveRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Draw the full construction for `points` at parameter `t`.
    ///
    /// `points` is the complete evaluation sequence: start, interior control
    /// points in order, end. `t` is clamped to `[0, 1]`; NaN draws as 0.
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        points: &[Point2],
        t: f64,
        mode: DisplayMode,
    ) -> Result<()> {
        let curve = BezierCurve::new(points.to_vec()).map_err(|e| {
            CasteljauError::InvalidOperation(format!("Cannot render control points: {}", e))
        })?;
        let t = clamp_unit(t).unwrap_or(0.0);

        if mode.show_trace {
            self.draw_trace(surface, &curve, t);
        }
        self.draw_markers(surface, points);
        if mode.show_construction {
            self.draw_construction(surface, &curve, t);
        }
        if mode.show_native_curve {
            surface.stroke_curve_reveal(points, t, &self.style.native_curve);
        }
        Ok(())
    }

    /// Draw the plain start-to-end line used while a cubic has no curve yet,
    /// with markers for the endpoints and any placed `controls`.
    pub fn render_straight_line(
        &self,
        surface: &mut dyn DrawSurface,
        start: Point2,
        end: Point2,
        controls: &[Point2],
    ) {
        stroke_polyline(surface, &[start, end], &self.style.straight_line);
        surface.fill_circle(start, self.style.endpoint_radius, self.style.endpoint_color);
        surface.fill_circle(end, self.style.endpoint_radius, self.style.endpoint_color);
        for &p in controls {
            surface.fill_circle(p, self.style.control_radius, self.style.control_color);
        }
    }

    fn draw_trace(&self, surface: &mut dyn DrawSurface, curve: &BezierCurve, t: f64) {
        let samples = trace_polyline(curve, t, self.style.trace_step);
        stroke_polyline(surface, &samples, &self.style.trace);
    }

    /// Level 0 is the control polygon. While `t > 0` every further level
    /// draws its points in the level color and, with two or more points,
    /// the segments between them. The final level is the curve point itself.
    fn draw_construction(&self, surface: &mut dyn DrawSurface, curve: &BezierCurve, t: f64) {
        let levels = curve.levels(t);
        let last = levels.len() - 1;
        log::trace!("Drawing {} construction levels at t={}", levels.len(), t);

        for (depth, level) in levels.iter().enumerate() {
            if depth == 0 {
                stroke_polyline(surface, level, &self.style.polygon);
                continue;
            }
            if t <= 0.0 {
                break;
            }

            let (color, radius) = if depth == last {
                (self.style.palette.prominent(), self.style.curve_point_radius)
            } else {
                (
                    self.style.palette.color_for_depth(depth),
                    self.style.level_point_radius,
                )
            };
            for &p in level {
                surface.fill_circle(p, radius, color);
            }
            stroke_polyline(surface, level, &self.style.level_segments.with_color(color));
        }
    }

    fn draw_markers(&self, surface: &mut dyn DrawSurface, points: &[Point2]) {
        let style = &self.style;
        if let [start, interior @ .., end] = points {
            for &p in interior {
                surface.fill_circle(p, style.control_radius, style.control_color);
            }
            surface.fill_circle(*start, style.endpoint_radius, style.endpoint_color);
            surface.fill_circle(*end, style.endpoint_radius, style.endpoint_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::recorder::{CommandRecorder, DrawCommand};
    use casteljau_geometry::evaluate;
    use casteljau_math::dvec2;

    fn cubic_points() -> Vec<Point2> {
        vec![
            dvec2(0.0, 1.0),
            dvec2(10.0, 12.0),
            dvec2(12.0, 13.0),
            dvec2(15.0, 1.0),
        ]
    }

    fn construction_only() -> DisplayMode {
        DisplayMode {
            show_construction: true,
            show_trace: false,
            show_native_curve: false,
        }
    }

    #[test]
    fn test_rejects_short_sequence() {
        let renderer = CurveRenderer::default();
        let mut rec = CommandRecorder::new();
        let err = renderer
            .render(&mut rec, &[dvec2(1.0, 1.0)], 0.5, DisplayMode::default())
            .unwrap_err();
        assert!(matches!(err, CasteljauError::InvalidOperation(_)));
        assert!(rec.is_empty());
    }

    #[test]
    fn test_markers_emphasize_endpoints() {
        let renderer = CurveRenderer::default();
        let mut rec = CommandRecorder::new();
        renderer
            .render(&mut rec, &cubic_points(), 0.0, construction_only())
            .unwrap();

        let circles: Vec<_> = rec.circles().collect();
        // t = 0 draws no levels, only the four markers
        assert_eq!(circles.len(), 4);
        let endpoints: Vec<_> = circles.iter().filter(|c| c.2 == Color::RED).collect();
        assert_eq!(endpoints.len(), 2);
        assert!(endpoints.iter().all(|c| c.1 == 12.0));
        let controls: Vec<_> = circles.iter().filter(|c| c.2 == Color::MAGENTA).collect();
        assert_eq!(controls.len(), 2);
    }

    #[test]
    fn test_draw_order_trace_markers_construction_overlay() {
        let renderer = CurveRenderer::default();
        let mut rec = CommandRecorder::new();
        let mode = DisplayMode {
            show_native_curve: true,
            ..DisplayMode::default()
        };
        renderer.render(&mut rec, &cubic_points(), 0.5, mode).unwrap();

        let commands = rec.commands();
        let strokes: Vec<usize> = commands
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, DrawCommand::StrokePath { .. }))
            .map(|(i, _)| i)
            .collect();
        let first_circle = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .unwrap();

        // trace, polygon, level 1, level 2
        assert_eq!(strokes.len(), 4);
        assert!(strokes[0] < first_circle);
        assert!(strokes[1] > first_circle);

        // The four markers come straight after the trace
        let markers = &commands[strokes[0] + 1..strokes[0] + 5];
        assert!(markers
            .iter()
            .all(|c| matches!(c, DrawCommand::FillCircle { .. })));
        assert!(matches!(
            markers[3],
            DrawCommand::FillCircle { color, .. } if color == Color::RED
        ));
        assert!(matches!(
            commands.last(),
            Some(DrawCommand::StrokeCurveReveal { .. })
        ));
    }

    #[test]
    fn test_polygon_is_dashed_in_input_order() {
        let renderer = CurveRenderer::default();
        let mut rec = CommandRecorder::new();
        renderer
            .render(&mut rec, &cubic_points(), 0.0, construction_only())
            .unwrap();

        let paths = rec.paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].points, cubic_points());
        assert!(paths[0].style.is_dashed());
    }

    #[test]
    fn test_every_level_drawn_with_palette() {
        let renderer = CurveRenderer::new(RenderStyle::cubic());
        let mut rec = CommandRecorder::new();
        let t = 0.25;
        renderer
            .render(&mut rec, &cubic_points(), t, construction_only())
            .unwrap();

        // polygon + level 1 (3 points) + level 2 (2 points); the final level has no segment
        let paths = rec.paths();
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[1].points.len(), 3);
        assert_eq!(paths[1].style.color, Color::GREEN);
        assert_eq!(paths[2].points.len(), 2);
        assert_eq!(paths[2].style.color, Color::CYAN);

        let circles: Vec<_> = rec.circles().collect();
        assert_eq!(circles.iter().filter(|c| c.2 == Color::GREEN).count(), 3);
        assert_eq!(circles.iter().filter(|c| c.2 == Color::CYAN).count(), 2);

        let finals: Vec<_> = circles.iter().filter(|c| c.2 == Color::ORANGE).collect();
        assert_eq!(finals.len(), 1);
        assert_eq!(finals[0].0, evaluate(&cubic_points(), t));
    }

    #[test]
    fn test_final_point_prominent_when_palette_saturates() {
        let renderer = CurveRenderer::new(RenderStyle::cubic());
        let mut rec = CommandRecorder::new();
        let points: Vec<_> = (0..7).map(|i| dvec2(i as f64, (i % 2) as f64)).collect();
        renderer
            .render(&mut rec, &points, 0.5, construction_only())
            .unwrap();

        // Levels 1..=5 carry 6, 5, 4, 3, 2 points; depth 3 and beyond saturate to orange
        let circles: Vec<_> = rec.circles().collect();
        assert_eq!(circles.iter().filter(|c| c.2 == Color::GREEN).count(), 6);
        assert_eq!(circles.iter().filter(|c| c.2 == Color::CYAN).count(), 5);
        assert_eq!(circles.iter().filter(|c| c.2 == Color::ORANGE).count(), 4 + 3 + 2 + 1);

        // Level 4 also has a point at (3, 0.5); the curve point is drawn after it
        let curve_point = circles
            .iter()
            .rev()
            .find(|c| c.0 == evaluate(&points, 0.5) && c.2 == Color::ORANGE)
            .unwrap();
        assert_eq!(curve_point.1, RenderStyle::cubic().curve_point_radius);
    }

    #[test]
    fn test_trace_ends_at_curve_point() {
        let renderer = CurveRenderer::default();
        let mut rec = CommandRecorder::new();
        let mode = DisplayMode {
            show_construction: false,
            show_trace: true,
            show_native_curve: false,
        };
        renderer.render(&mut rec, &cubic_points(), 0.5, mode).unwrap();

        let paths = rec.paths();
        assert_eq!(paths.len(), 1);
        let trace = &paths[0];
        assert_eq!(trace.style, renderer.style().trace);
        assert_eq!(trace.points[0], cubic_points()[0]);
        assert_eq!(trace.points[trace.points.len() - 1], evaluate(&cubic_points(), 0.5));
        // 0, 0.025, ..., 0.475, then 0.5
        assert_eq!(trace.points.len(), 21);
    }

    #[test]
    fn test_trace_skipped_at_zero() {
        let renderer = CurveRenderer::default();
        let mut rec = CommandRecorder::new();
        let mode = DisplayMode {
            show_construction: false,
            show_trace: true,
            show_native_curve: false,
        };
        renderer.render(&mut rec, &cubic_points(), 0.0, mode).unwrap();
        assert!(rec.paths().is_empty());
    }

    #[test]
    fn test_native_overlay_reveal_tracks_t() {
        let renderer = CurveRenderer::default();
        let mut rec = CommandRecorder::new();
        let mode = DisplayMode {
            show_native_curve: true,
            ..DisplayMode::default()
        };
        renderer.render(&mut rec, &cubic_points(), 1.5, mode).unwrap();

        let reveals: Vec<_> = rec.curve_reveals().collect();
        assert_eq!(reveals.len(), 1);
        assert_eq!(reveals[0].0, cubic_points().as_slice());
        assert_eq!(reveals[0].1, 1.0);
        assert!(matches!(
            rec.commands().last(),
            Some(DrawCommand::StrokeCurveReveal { .. })
        ));
    }

    #[test]
    fn test_straight_line_for_incomplete_cubic() {
        let renderer = CurveRenderer::new(RenderStyle::cubic());
        let mut rec = CommandRecorder::new();
        let control = dvec2(5.0, 5.0);
        renderer.render_straight_line(&mut rec, dvec2(0.0, 0.0), dvec2(10.0, 0.0), &[control]);

        let paths = rec.paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].style.color, Color::BLUE);
        assert_eq!(rec.circles().count(), 3);
        assert!(rec.circles().any(|c| c.0 == control && c.2 == Color::DARK_GRAY));
    }
}
