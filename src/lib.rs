//! Draws a colored frame around the focused top-level window.
//!
//! Pure logic (geometry, border sets, the tracker and its scheduler) lives
//! here and runs against the [`platform::Platform`] facade, so it is tested
//! with [`platform::mock::MockPlatform`]. The Win32 backend is under
//! `platform::windows`.

pub mod border;
pub mod error;
pub mod logging;
pub mod model;
pub mod platform;
pub mod runtime;
pub mod tracker;

// Re-export the main types for convenience
pub use border::{destroy_border_set, make_border_set, BorderSet, Edge};
pub use error::{Error, Result};
pub use model::{BorderStyle, Rect, Rgb, WindowHandle};
pub use platform::Platform;
pub use runtime::Schedule;
pub use tracker::{TickOutcome, Tracker, TrackerState};
