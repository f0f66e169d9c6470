use casteljau_core::{CasteljauError, Result};
use casteljau_math::{clamp_unit, is_finite_point, Point2};
use casteljau_render::{CurveRenderer, DisplayMode, DrawSurface};

use crate::control_points::ControlPointSet;
use crate::cubic::CubicControls;
use crate::model::ControlModel;
use crate::options::EditorOptions;

/// Editing state of one curve: control points, `t`, display mode, and the
/// point currently being dragged.
///
/// Every mutation marks the editor dirty; [`Editor::draw`] repaints the
/// whole construction from scratch. Points with NaN or infinite coordinates
/// never reach the model.
#[derive(Debug, Clone)]
pub struct Editor<M: ControlModel> {
    pub(crate) model: M,
    renderer: CurveRenderer,
    t: f64,
    mode: DisplayMode,
    pick_radius: f64,
    pub(crate) drag: Option<M::Handle>,
    needs_redraw: bool,
}

impl<M: ControlModel> Editor<M> {
    /// Wrap `model` using the generalized style of `options`.
    pub fn new(model: M, options: &EditorOptions) -> Self {
        Self::with_renderer(model, CurveRenderer::new(options.style.clone()), options)
    }

    fn with_renderer(model: M, renderer: CurveRenderer, options: &EditorOptions) -> Self {
        Self {
            model,
            renderer,
            t: clamp_unit(options.initial_t).unwrap_or(0.0),
            mode: options.display_mode,
            pick_radius: options.pick_radius,
            drag: None,
            needs_redraw: true,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn renderer(&self) -> &CurveRenderer {
        &self.renderer
    }

    pub fn parameter_t(&self) -> f64 {
        self.t
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn pick_radius(&self) -> f64 {
        self.pick_radius
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Handle of the point being dragged, if any.
    pub fn drag_target(&self) -> Option<M::Handle> {
        self.drag
    }

    pub fn add_control_point(&mut self, p: Point2) -> Option<M::Handle> {
        if !is_finite_point(p) {
            log::warn!("Ignoring non-finite control point ({}, {})", p.x, p.y);
            return None;
        }
        let handle = self.model.add(p);
        match handle {
            Some(h) => {
                log::debug!("Added control point {:?} at ({}, {})", h, p.x, p.y);
                self.needs_redraw = true;
            }
            None => log::debug!("No room for a control point at ({}, {})", p.x, p.y),
        }
        handle
    }

    /// Remove a control point. Unknown handles leave the editor untouched.
    pub fn remove_control_point(&mut self, handle: M::Handle) -> Option<Point2> {
        let removed = self.model.remove(handle)?;
        if self.drag == Some(handle) {
            self.drag = None;
        }
        log::debug!("Removed control point {:?}", handle);
        self.needs_redraw = true;
        Some(removed)
    }

    /// Remove the control point picked at `location`, if any.
    pub fn remove_nearest(&mut self, location: Point2) -> Option<Point2> {
        let handle = self.control_point_at(location)?;
        self.remove_control_point(handle)
    }

    pub fn move_control_point(&mut self, handle: M::Handle, p: Point2) -> Result<()> {
        if !is_finite_point(p) {
            log::warn!("Refusing to move {:?} to ({}, {})", handle, p.x, p.y);
            return Err(CasteljauError::Geometry(format!(
                "Control point target ({}, {}) is not finite",
                p.x, p.y
            )));
        }
        self.model.move_point(handle, p)?;
        log::trace!("Moved control point {:?} to ({}, {})", handle, p.x, p.y);
        self.needs_redraw = true;
        Ok(())
    }

    /// Hit test `location` against the control points with the pick radius.
    pub fn control_point_at(&self, location: Point2) -> Option<M::Handle> {
        self.model.hit_test(location, self.pick_radius)
    }

    /// Move the start point. Non-finite points are ignored.
    pub fn set_start_point(&mut self, p: Point2) {
        if !is_finite_point(p) {
            log::warn!("Ignoring non-finite start point ({}, {})", p.x, p.y);
            return;
        }
        self.model.set_start(p);
        self.needs_redraw = true;
    }

    /// Move the end point. Non-finite points are ignored.
    pub fn set_end_point(&mut self, p: Point2) {
        if !is_finite_point(p) {
            log::warn!("Ignoring non-finite end point ({}, {})", p.x, p.y);
            return;
        }
        self.model.set_end(p);
        self.needs_redraw = true;
    }

    /// Set the parameter, clamped to `[0, 1]`. NaN is ignored.
    pub fn set_parameter_t(&mut self, t: f64) {
        match clamp_unit(t) {
            Some(t) => {
                self.t = t;
                self.needs_redraw = true;
            }
            None => log::warn!("Ignoring non-numeric parameter t"),
        }
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.needs_redraw = true;
    }

    /// Clear `surface` and draw the current construction on it.
    pub fn draw(&mut self, surface: &mut dyn DrawSurface) -> Result<()> {
        surface.clear();
        self.model.render(&self.renderer, surface, self.t, self.mode)?;
        self.needs_redraw = false;
        Ok(())
    }
}

impl Editor<ControlPointSet> {
    /// Editor for any number of control points, endpoints placed per
    /// `options`.
    pub fn generalized(options: &EditorOptions) -> Self {
        let (start, end) = options.default_endpoints();
        Self::new(ControlPointSet::new(start, end), options)
    }

    /// Start, interior points, end.
    pub fn control_sequence(&self) -> Vec<Point2> {
        self.model.to_sequence()
    }
}

impl Editor<CubicControls> {
    /// Four-point editor using the cubic style of `options`.
    pub fn cubic(options: &EditorOptions) -> Self {
        let (start, end) = options.default_endpoints();
        Self::with_renderer(
            CubicControls::new(start, end),
            CurveRenderer::new(options.cubic_style.clone()),
            options,
        )
    }
}
