use crate::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in the canvas plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb2 {
    /// Square box of half-size `half_extent` centred on `center`.
    pub fn around(center: Point2, half_extent: f64) -> Self {
        let offset = Vector2::splat(half_extent);
        Self {
            min: center - offset,
            max: center + offset,
        }
    }

    /// Inclusive on every edge.
    pub fn contains_point(&self, p: Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
