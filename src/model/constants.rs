//! Compile-time parameters and default values.
//!
//! The executable reads no configuration; everything tunable lives here.

use super::geometry::Rgb;

// === Border Defaults ===

/// Border thickness in device pixels.
pub const BORDER_THICKNESS: i32 = 5;

/// Border fill color - pure red.
pub const BORDER_COLOR: Rgb = Rgb::RED;

/// Constant source alpha applied to every overlay (0 invisible, 255 opaque).
pub const BORDER_ALPHA: u8 = 200;

// === Validation Limits ===

/// Minimum border thickness in pixels.
pub const MIN_THICKNESS: i32 = 1;

/// Maximum border thickness in pixels.
pub const MAX_THICKNESS: i32 = 64;

// === Timing ===

/// Interval between two tracker ticks, in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 100;

/// Longest idle sleep between two event pump passes, in milliseconds.
pub const PUMP_SLICE_MS: u64 = 10;

// === Window Class ===

/// Window class shared by every overlay surface.
pub const OVERLAY_CLASS_NAME: &str = "FocusFrameOverlayClass";
