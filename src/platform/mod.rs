//! Platform facade.
//!
//! Everything the tracker needs from the host windowing system goes through
//! the [`Platform`] trait. One value is created at startup and owned by the
//! tracker, so the real backend and the recording [`mock::MockPlatform`] are
//! interchangeable.
//!
//! - [`windows`]: Win32 backend (layered tool windows, GDI fill, message pump)
//! - [`mock`]: in-memory backend that records every call

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

use crate::error::Result;
use crate::model::{Rect, Rgb, WindowHandle};

/// Host windowing operations used by the overlay tracker.
///
/// Implementations are bound to the thread that created them: the thread
/// that registers the class also creates, destroys and pumps.
pub trait Platform {
    /// Register the overlay window class. Registering the same name twice
    /// is not an error.
    fn register_overlay_class(&mut self, name: &str) -> Result<()>;

    /// Create a layered, topmost, click-through tool window at `rect`,
    /// filled with `color` at constant `alpha`, and show it.
    ///
    /// On failure nothing created by this call is left alive.
    fn create_overlay(&mut self, rect: Rect, color: Rgb, alpha: u8) -> Result<WindowHandle>;

    /// Destroy a window. No-op on [`WindowHandle::NULL`].
    fn destroy(&mut self, handle: WindowHandle);

    /// Screen rectangle of the current foreground top-level window, or
    /// `None` when there is none (or it cannot be queried).
    fn query_foreground_rect(&mut self) -> Option<(WindowHandle, Rect)>;

    /// Peek one pending message from the thread queue and dispatch it.
    /// Never blocks; returns `false` when the queue was empty.
    ///
    /// The queue is drained by [`crate::runtime::run`], which calls this
    /// between tracker ticks for the lifetime of the process.
    fn pump_one(&mut self) -> bool;
}
