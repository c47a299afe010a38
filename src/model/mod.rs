//! Application domain model.
//!
//! This module contains pure data types (no FFI dependencies): screen
//! rectangles, colors, window handles, the border style and the
//! compile-time constants they default to.
//!
//! Platform-specific window code is in `platform::windows`.

pub mod constants;
pub mod geometry;
pub mod handle;
pub mod style;

pub use constants::*;
pub use geometry::{Rect, Rgb};
pub use handle::WindowHandle;
pub use style::BorderStyle;
