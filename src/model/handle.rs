//! Opaque window identity.

use std::fmt;

/// Identity of a platform-managed window.
///
/// Unique while the window is alive; the platform may hand the same value
/// out again after the window is destroyed. `WindowHandle::NULL` is the
/// sentinel for "no window".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    /// Sentinel handle.
    pub const NULL: WindowHandle = WindowHandle(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
