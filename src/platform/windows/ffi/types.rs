//! Type conversions between Win32 and the domain model.

use std::ffi::c_void;

use windows::Win32::Foundation::{GetLastError, HWND, RECT};

use crate::model::{Rect, WindowHandle};

pub fn handle_from_hwnd(hwnd: HWND) -> WindowHandle {
    WindowHandle(hwnd.0 as isize)
}

pub fn hwnd_from_handle(handle: WindowHandle) -> HWND {
    HWND(handle.0 as *mut c_void)
}

pub fn rect_from_win32(rc: RECT) -> Rect {
    Rect::new(rc.left, rc.top, rc.right, rc.bottom)
}

/// NUL-terminated UTF-16 copy of `s`.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Calling thread's last OS error code.
pub fn last_error_code() -> u32 {
    unsafe { GetLastError() }.0
}
