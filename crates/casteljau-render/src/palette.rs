//! Fixed, ordered colors for De Casteljau construction levels.

use casteljau_core::traits::Validate;
use casteljau_core::{CasteljauError, Result};
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Ordered colors indexed by reduction depth.
///
/// Depth 1 (the first interpolated level) takes the first entry. Depths past
/// the end of the list saturate at the last entry, which is also the color
/// of the final curve point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelPalette {
    colors: Vec<Color>,
}

impl LevelPalette {
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        let palette = Self { colors };
        palette.validate()?;
        Ok(palette)
    }

    /// Ten translucent grays, lightening with depth, followed by orange.
    pub fn grayscale() -> Self {
        const MIN: f32 = 0.2;
        const MAX: f32 = 0.8;

        let mut colors: Vec<Color> = (1..=10)
            .map(|i| {
                let white = (i as f32 / 10.0) * (MAX - MIN) + MIN;
                Color::gray(white, 0.6)
            })
            .collect();
        colors.push(Color::ORANGE);
        Self { colors }
    }

    /// Palette of the classic cubic construction.
    pub fn cubic() -> Self {
        Self {
            colors: vec![Color::GREEN, Color::CYAN, Color::ORANGE],
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color of the interpolated level at `depth` (1-based).
    pub fn color_for_depth(&self, depth: usize) -> Color {
        let index = depth.saturating_sub(1).min(self.colors.len().saturating_sub(1));
        self.colors.get(index).copied().unwrap_or(Color::ORANGE)
    }

    /// The last, most prominent entry.
    pub fn prominent(&self) -> Color {
        self.colors.last().copied().unwrap_or(Color::ORANGE)
    }
}

impl Default for LevelPalette {
    fn default() -> Self {
        Self::grayscale()
    }
}

impl Validate for LevelPalette {
    fn validate(&self) -> Result<()> {
        if self.colors.is_empty() {
            return Err(CasteljauError::Config(
                "Level palette needs at least one color".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_has_eleven_entries() {
        let palette = LevelPalette::grayscale();
        assert_eq!(palette.len(), 11);
        assert_eq!(palette.prominent(), Color::ORANGE);

        let first = palette.colors()[0];
        assert!((first.r - 0.26).abs() < 1e-6);
        assert!((first.a - 0.6).abs() < 1e-6);
        assert!((palette.colors()[9].r - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_depth_indexing() {
        let palette = LevelPalette::cubic();
        assert_eq!(palette.color_for_depth(1), Color::GREEN);
        assert_eq!(palette.color_for_depth(2), Color::CYAN);
        assert_eq!(palette.color_for_depth(3), Color::ORANGE);
    }

    #[test]
    fn test_depth_saturates_at_last_entry() {
        let palette = LevelPalette::grayscale();
        assert_eq!(palette.color_for_depth(11), Color::ORANGE);
        assert_eq!(palette.color_for_depth(40), Color::ORANGE);
        assert_eq!(LevelPalette::cubic().color_for_depth(9), Color::ORANGE);
    }

    #[test]
    fn test_depth_zero_uses_first_entry() {
        assert_eq!(LevelPalette::cubic().color_for_depth(0), Color::GREEN);
    }

    #[test]
    fn test_empty_palette_rejected() {
        let err = LevelPalette::new(vec![]).unwrap_err();
        assert!(matches!(err, CasteljauError::Config(_)));
        assert!(LevelPalette::new(vec![Color::RED]).is_ok());
    }
}
