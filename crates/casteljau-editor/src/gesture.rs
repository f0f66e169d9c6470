//! Touch-style input mapped onto editor mutations.

use casteljau_math::Point2;
use serde::{Deserialize, Serialize};

use crate::editor::Editor;
use crate::model::ControlModel;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    Tap(Point2),
    DoubleTap(Point2),
    PanBegan(Point2),
    PanChanged(Point2),
    PanEnded,
    PanCancelled,
}

impl<M: ControlModel> Editor<M> {
    /// Apply one gesture.
    ///
    /// A tap on empty space adds a point, a double tap removes the point
    /// under it, and a pan drags the point picked when the pan began.
    pub fn handle_gesture(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Tap(p) => {
                if self.control_point_at(p).is_none() {
                    self.add_control_point(p);
                }
            }
            Gesture::DoubleTap(p) => {
                self.remove_nearest(p);
            }
            Gesture::PanBegan(p) => {
                self.drag = self.control_point_at(p);
                self.drag_to(p);
            }
            Gesture::PanChanged(p) => self.drag_to(p),
            Gesture::PanEnded | Gesture::PanCancelled => self.drag = None,
        }
    }

    fn drag_to(&mut self, p: Point2) {
        let Some(handle) = self.drag else {
            return;
        };
        if let Err(e) = self.move_control_point(handle, p) {
            log::debug!("Dropping drag target: {}", e);
            self.drag = None;
        }
    }
}
