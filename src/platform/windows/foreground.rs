//! Foreground window query.

use tracing::debug;
use windows::Win32::Foundation::RECT;
use windows::Win32::UI::WindowsAndMessaging::{GetForegroundWindow, GetWindowRect};

use super::ffi::{handle_from_hwnd, rect_from_win32};
use crate::model::{Rect, WindowHandle};

/// Handle and screen rectangle of the foreground window, if any.
pub fn query() -> Option<(WindowHandle, Rect)> {
    unsafe {
        let hwnd = GetForegroundWindow();
        if hwnd.is_invalid() {
            return None;
        }

        let mut rc = RECT::default();
        if let Err(e) = GetWindowRect(hwnd, &mut rc) {
            // Window went away between the two calls.
            debug!(hwnd = ?hwnd.0, "GetWindowRect failed: {e}");
            return None;
        }

        Some((handle_from_hwnd(hwnd), rect_from_win32(rc)))
    }
}
