//! De Casteljau visualizer geometry: curve evaluation, Bezier curves, and tessellation.

pub mod casteljau;
pub mod curve;
pub mod tessellate;

pub use casteljau::{evaluate, evaluate_levels, hodograph, reduce, Levels};
pub use casteljau_math::lerp;
pub use curve::{BezierCurve, Curve};
