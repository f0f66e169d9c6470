pub mod color;
pub mod palette;
pub mod recorder;
pub mod renderer;
pub mod style;
pub mod surface;
pub mod svg;

// Re-export main types
pub use color::Color;
pub use palette::LevelPalette;
pub use recorder::{CommandRecorder, DrawCommand};
pub use renderer::{CurveRenderer, DisplayMode};
pub use style::RenderStyle;
pub use surface::{stroke_polyline, DrawSurface, StrokeStyle};
pub use svg::SvgSurface;
