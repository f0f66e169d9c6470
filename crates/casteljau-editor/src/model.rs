//! The seam between the editor and the shape of its control points.

use casteljau_core::Result;
use casteljau_math::Point2;
use casteljau_render::{CurveRenderer, DisplayMode, DrawSurface};

/// A set of control points the user can edit between two fixed endpoints.
///
/// Points are addressed through `Handle`s, never by value: two control
/// points at the same coordinate are still distinct.
pub trait ControlModel {
    /// Identifies one user-editable control point.
    type Handle: Copy + PartialEq + std::fmt::Debug;

    fn start(&self) -> Point2;

    fn end(&self) -> Point2;

    fn set_start(&mut self, p: Point2);

    fn set_end(&mut self, p: Point2);

    /// Add a control point at `p`, returning its handle, or `None` if the
    /// model has no room for another point.
    fn add(&mut self, p: Point2) -> Option<Self::Handle>;

    /// Remove the point behind `handle`. Unknown handles are a no-op.
    fn remove(&mut self, handle: Self::Handle) -> Option<Point2>;

    /// Move the point behind `handle` to `p`.
    fn move_point(&mut self, handle: Self::Handle, p: Point2) -> Result<()>;

    /// The control point picked by a touch at `location`, if any lies within
    /// `radius`. Endpoints are never picked.
    fn hit_test(&self, location: Point2, radius: f64) -> Option<Self::Handle>;

    /// Draw the model's current curve at parameter `t`.
    fn render(
        &self,
        renderer: &CurveRenderer,
        surface: &mut dyn DrawSurface,
        t: f64,
        mode: DisplayMode,
    ) -> Result<()>;
}
