//! The classic four-point variant: two endpoints and two optional control
//! slots filled by successive taps.

use casteljau_core::{CasteljauError, Result};
use casteljau_math::{Aabb2, Point2};
use casteljau_render::{CurveRenderer, DisplayMode, DrawSurface};
use serde::{Deserialize, Serialize};

use crate::model::ControlModel;

/// One of the two interior slots of a cubic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CubicSlot {
    Control1,
    Control2,
}

impl CubicSlot {
    /// Slots in fill and pick order.
    pub const ALL: [CubicSlot; 2] = [CubicSlot::Control1, CubicSlot::Control2];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubicControls {
    pub start: Point2,
    pub end: Point2,
    pub control1: Option<Point2>,
    pub control2: Option<Point2>,
}

impl CubicControls {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            control1: None,
            control2: None,
        }
    }

    pub fn get(&self, slot: CubicSlot) -> Option<Point2> {
        match slot {
            CubicSlot::Control1 => self.control1,
            CubicSlot::Control2 => self.control2,
        }
    }

    fn slot_mut(&mut self, slot: CubicSlot) -> &mut Option<Point2> {
        match slot {
            CubicSlot::Control1 => &mut self.control1,
            CubicSlot::Control2 => &mut self.control2,
        }
    }

    /// Put `p` in the first empty slot. Returns `None` when both are taken.
    pub fn fill_next(&mut self, p: Point2) -> Option<CubicSlot> {
        let slot = CubicSlot::ALL
            .into_iter()
            .find(|&slot| self.get(slot).is_none())?;
        *self.slot_mut(slot) = Some(p);
        Some(slot)
    }

    pub fn clear(&mut self, slot: CubicSlot) -> Option<Point2> {
        self.slot_mut(slot).take()
    }

    /// Move an occupied slot. Empty slots are `NotFound`.
    pub fn set(&mut self, slot: CubicSlot, p: Point2) -> Result<()> {
        match self.slot_mut(slot) {
            Some(existing) => {
                *existing = p;
                Ok(())
            }
            None => Err(CasteljauError::NotFound(format!("{:?} is empty", slot))),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.control1.is_some() && self.control2.is_some()
    }

    /// `[start, control1, control2, end]` once both slots are filled.
    pub fn to_sequence(&self) -> Option<[Point2; 4]> {
        Some([self.start, self.control1?, self.control2?, self.end])
    }

    /// Occupied control points in slot order.
    pub fn placed(&self) -> Vec<Point2> {
        CubicSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot))
            .collect()
    }

    /// First occupied slot whose point lies in the square of half-size
    /// `radius` around `location`.
    pub fn slot_at(&self, location: Point2, radius: f64) -> Option<CubicSlot> {
        let pick = Aabb2::around(location, radius);
        CubicSlot::ALL
            .into_iter()
            .find(|&slot| self.get(slot).is_some_and(|p| pick.contains_point(p)))
    }
}

impl ControlModel for CubicControls {
    type Handle = CubicSlot;

    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }

    fn set_start(&mut self, p: Point2) {
        self.start = p;
    }

    fn set_end(&mut self, p: Point2) {
        self.end = p;
    }

    fn add(&mut self, p: Point2) -> Option<CubicSlot> {
        self.fill_next(p)
    }

    fn remove(&mut self, handle: CubicSlot) -> Option<Point2> {
        self.clear(handle)
    }

    fn move_point(&mut self, handle: CubicSlot, p: Point2) -> Result<()> {
        self.set(handle, p)
    }

    fn hit_test(&self, location: Point2, radius: f64) -> Option<CubicSlot> {
        self.slot_at(location, radius)
    }

    fn render(
        &self,
        renderer: &CurveRenderer,
        surface: &mut dyn DrawSurface,
        t: f64,
        mode: DisplayMode,
    ) -> Result<()> {
        match self.to_sequence() {
            Some(points) => renderer.render(surface, &points, t, mode),
            None => {
                renderer.render_straight_line(surface, self.start, self.end, &self.placed());
                Ok(())
            }
        }
    }
}
