//! Generalized control point set: fixed endpoints around any number of
//! interior control points.

use casteljau_core::{CasteljauError, Result};
use casteljau_math::{Aabb2, Point2};
use casteljau_render::{CurveRenderer, DisplayMode, DrawSurface};
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

use crate::model::ControlModel;

new_key_type! {
    /// Stable identity of an interior control point.
    pub struct ControlPointId;
}

/// Start and end points plus an ordered arena of interior control points.
///
/// The evaluated sequence is always `start, interior..., end`, so it holds at
/// least two points. Interior ids stay valid until their point is removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlPointSet {
    start: Point2,
    end: Point2,
    points: SlotMap<ControlPointId, Point2>,
    order: Vec<ControlPointId>,
}

impl ControlPointSet {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            points: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Append an interior control point after the existing ones.
    pub fn insert(&mut self, p: Point2) -> ControlPointId {
        let id = self.points.insert(p);
        self.order.push(id);
        id
    }

    pub fn remove(&mut self, id: ControlPointId) -> Option<Point2> {
        let p = self.points.remove(id)?;
        self.order.retain(|&other| other != id);
        Some(p)
    }

    pub fn get(&self, id: ControlPointId) -> Option<Point2> {
        self.points.get(id).copied()
    }

    pub fn set(&mut self, id: ControlPointId, p: Point2) -> Result<()> {
        let slot = self
            .points
            .get_mut(id)
            .ok_or_else(|| CasteljauError::NotFound(format!("Control point {:?}", id)))?;
        *slot = p;
        Ok(())
    }

    /// Number of interior control points.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Interior ids in sequence order.
    pub fn ids(&self) -> &[ControlPointId] {
        &self.order
    }

    /// Interior points in sequence order.
    pub fn interior(&self) -> impl Iterator<Item = Point2> + '_ {
        self.order.iter().map(move |&id| self.points[id])
    }

    /// The full evaluation sequence: start, interior points, end.
    pub fn to_sequence(&self) -> Vec<Point2> {
        let mut sequence = Vec::with_capacity(self.order.len() + 2);
        sequence.push(self.start);
        sequence.extend(self.interior());
        sequence.push(self.end);
        sequence
    }

    /// Nearest interior point inside the square pick area of half-size
    /// `radius` around `location`. Ties go to the most recently added point.
    pub fn nearest(&self, location: Point2, radius: f64) -> Option<ControlPointId> {
        let pick = Aabb2::around(location, radius);
        self.order
            .iter()
            .rev()
            .map(|&id| (id, self.points[id]))
            .filter(|&(_, p)| pick.contains_point(p))
            .min_by(|a, b| a.1.distance(location).total_cmp(&b.1.distance(location)))
            .map(|(id, _)| id)
    }
}

impl ControlModel for ControlPointSet {
    type Handle = ControlPointId;

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

    fn add(&mut self, p: Point2) -> Option<ControlPointId> {
        Some(self.insert(p))
    }

    fn remove(&mut self, handle: ControlPointId) -> Option<Point2> {
        ControlPointSet::remove(self, handle)
    }

    fn move_point(&mut self, handle: ControlPointId, p: Point2) -> Result<()> {
        self.set(handle, p)
    }

    fn hit_test(&self, location: Point2, radius: f64) -> Option<ControlPointId> {
        self.nearest(location, radius)
    }

    fn render(
        &self,
        renderer: &CurveRenderer,
        surface: &mut dyn DrawSurface,
        t: f64,
        mode: DisplayMode,
    ) -> Result<()> {
        renderer.render(surface, &self.to_sequence(), t, mode)
    }
}
