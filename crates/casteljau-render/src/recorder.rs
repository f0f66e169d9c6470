//! A surface that records draw calls instead of rasterizing them.

use casteljau_math::Point2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::surface::{DrawSurface, StrokeStyle};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear,
    MoveTo {
        point: Point2,
    },
    LineTo {
        point: Point2,
    },
    StrokePath {
        style: StrokeStyle,
    },
    FillCircle {
        center: Point2,
        radius: f64,
        color: Color,
    },
    StrokeCurveReveal {
        control_points: Vec<Point2>,
        reveal: f64,
        style: StrokeStyle,
    },
}

/// A stroked path reassembled from `MoveTo`/`LineTo`/`StrokePath` commands.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPath {
    pub points: Vec<Point2>,
    pub style: StrokeStyle,
}

/// Records every call of one draw pass. `clear` starts a fresh recording.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Filled point markers as `(center, radius, color)`.
    pub fn circles(&self) -> impl Iterator<Item = (Point2, f64, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    /// Stroked paths in drawing order. Subpaths of one stroke are concatenated.
    pub fn paths(&self) -> Vec<RecordedPath> {
        let mut paths = Vec::new();
        let mut current = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::MoveTo { point } | DrawCommand::LineTo { point } => current.push(*point),
                DrawCommand::StrokePath { style } => paths.push(RecordedPath {
                    points: std::mem::take(&mut current),
                    style: style.clone(),
                }),
                _ => {}
            }
        }
        paths
    }

    /// Native curve reveals as `(control_points, reveal)`.
    pub fn curve_reveals(&self) -> impl Iterator<Item = (&[Point2], f64)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::StrokeCurveReveal {
                control_points,
                reveal,
                ..
            } => Some((control_points.as_slice(), *reveal)),
            _ => None,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.commands)
    }
}

impl DrawSurface for CommandRecorder {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn move_to(&mut self, p: Point2) {
        self.commands.push(DrawCommand::MoveTo { point: p });
    }

    fn line_to(&mut self, p: Point2) {
        self.commands.push(DrawCommand::LineTo { point: p });
    }

    fn stroke_path(&mut self, style: &StrokeStyle) {
        self.commands.push(DrawCommand::StrokePath {
            style: style.clone(),
        });
    }

    fn fill_circle(&mut self, center: Point2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_curve_reveal(&mut self, control_points: &[Point2], reveal: f64, style: &StrokeStyle) {
        self.commands.push(DrawCommand::StrokeCurveReveal {
            control_points: control_points.to_vec(),
            reveal,
            style: style.clone(),
        });
    }
}
