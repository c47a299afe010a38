//! Border appearance.

use super::constants::*;
use super::geometry::Rgb;

/// How a border set is drawn: thickness, fill color and constant alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderStyle {
    /// Thickness of each border line in pixels.
    pub thickness: i32,
    /// Solid fill color.
    pub color: Rgb,
    /// Constant alpha applied to the whole surface.
    pub alpha: u8,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            thickness: BORDER_THICKNESS,
            color: BORDER_COLOR,
            alpha: BORDER_ALPHA,
        }
    }
}

impl BorderStyle {
    /// Clamps the thickness to `[MIN_THICKNESS, MAX_THICKNESS]`.
    pub fn validate(&mut self) {
        self.thickness = self.thickness.clamp(MIN_THICKNESS, MAX_THICKNESS);
    }
}
