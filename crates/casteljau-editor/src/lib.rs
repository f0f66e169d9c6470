//! Editing model for the De Casteljau visualizer.
//!
//! An [`Editor`] owns the control points of one curve, the parameter `t`,
//! and the display mode, and turns input events into mutations followed by
//! a full redraw.

pub mod control_points;
pub mod cubic;
pub mod editor;
pub mod gesture;
pub mod model;
pub mod options;

pub use control_points::{ControlPointId, ControlPointSet};
pub use cubic::{CubicControls, CubicSlot};
pub use editor::Editor;
pub use gesture::Gesture;
pub use model::ControlModel;
pub use options::EditorOptions;
