//! Overlay window class and its window procedure.

use windows::core::PCWSTR;
use windows::Win32::Foundation::{
    GetLastError, ERROR_CLASS_ALREADY_EXISTS, HINSTANCE, HWND, LPARAM, LRESULT, WPARAM,
};
use windows::Win32::UI::WindowsAndMessaging::{
    DefWindowProcW, DestroyWindow, RegisterClassW, WM_CLOSE, WNDCLASSW,
};

/// Outcome of a successful registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Registered,
    AlreadyRegistered,
}

/// Register the overlay class. Returns the OS error code on failure.
pub fn register_class(instance: HINSTANCE, class_name: PCWSTR) -> Result<Registration, u32> {
    let wc = WNDCLASSW {
        lpfnWndProc: Some(overlay_wndproc),
        hInstance: instance,
        lpszClassName: class_name,
        ..Default::default()
    };

    unsafe {
        if RegisterClassW(&wc) != 0 {
            return Ok(Registration::Registered);
        }
        let err = GetLastError();
        if err == ERROR_CLASS_ALREADY_EXISTS {
            Ok(Registration::AlreadyRegistered)
        } else {
            Err(err.0)
        }
    }
}

extern "system" fn overlay_wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_CLOSE => {
                let _ = DestroyWindow(hwnd);
                LRESULT(0)
            }
            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
