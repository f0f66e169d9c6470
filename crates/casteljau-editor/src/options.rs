//! Editor options, persisted as TOML.

use std::path::Path;

use casteljau_core::traits::Validate;
use casteljau_core::{CasteljauError, Result};
use casteljau_math::{dvec2, Point2};
use casteljau_render::{DisplayMode, RenderStyle};
use serde::{Deserialize, Serialize};

/// Half-size of the square pick area around a touch, in canvas units.
pub const PICK_RADIUS: f64 = 44.0;
pub const CANVAS_WIDTH: f64 = 640.0;
pub const CANVAS_HEIGHT: f64 = 480.0;
/// Distance of the default endpoints from the left and right edges.
pub const MARGIN: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    pub pick_radius: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub margin: f64,
    pub initial_t: f64,
    pub display_mode: DisplayMode,
    /// Style of the generalized editor
    pub style: RenderStyle,
    /// Style of the four-point editor
    pub cubic_style: RenderStyle,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pick_radius: PICK_RADIUS,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            margin: MARGIN,
            initial_t: 0.0,
            display_mode: DisplayMode::default(),
            style: RenderStyle::generalized(),
            cubic_style: RenderStyle::cubic(),
        }
    }
}

impl EditorOptions {
    /// Load options from a TOML file. Missing, malformed, or invalid files
    /// fall back to the defaults.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Loaded options from {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Options file is malformed, using defaults: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No options file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Parse and validate options from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let opts: Self =
            toml::from_str(content).map_err(|e| CasteljauError::Parse(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CasteljauError::Parse(e.to_string()))
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)?;
        log::info!("Saved options to {}", path.display());
        Ok(())
    }

    /// Start and end points: vertically centred, `margin` in from each side.
    pub fn default_endpoints(&self) -> (Point2, Point2) {
        let y = self.canvas_height / 2.0;
        (dvec2(self.margin, y), dvec2(self.canvas_width - self.margin, y))
    }
}

impl Validate for EditorOptions {
    fn validate(&self) -> Result<()> {
        if !(self.pick_radius > 0.0 && self.pick_radius.is_finite()) {
            return Err(CasteljauError::Config(format!(
                "pick_radius must be positive, got {}",
                self.pick_radius
            )));
        }
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(CasteljauError::Config(format!(
                "canvas must have a positive size, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !(self.margin >= 0.0 && 2.0 * self.margin < self.canvas_width) {
            return Err(CasteljauError::Config(format!(
                "margin {} does not fit a canvas {} wide",
                self.margin, self.canvas_width
            )));
        }
        if !(0.0..=1.0).contains(&self.initial_t) {
            return Err(CasteljauError::Config(format!(
                "initial_t must be in [0, 1], got {}",
                self.initial_t
            )));
        }
        self.style.validate()?;
        self.cubic_style.validate()
    }
}
