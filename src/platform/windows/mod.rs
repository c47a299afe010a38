//! Win32 implementation of the platform facade.
//!
//! - [`class`]: overlay window class and window procedure
//! - [`surface`]: layered, topmost, click-through overlay creation
//! - [`foreground`]: foreground window query
//! - [`pump`]: non-blocking message pump
//! - [`process`]: DPI awareness and console shutdown handling

pub mod class;
pub mod ffi;
pub mod foreground;
pub mod process;
pub mod pump;
pub mod surface;

use tracing::{debug, warn};
use windows::core::PCWSTR;
use windows::Win32::Foundation::HINSTANCE;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::DestroyWindow;

use self::class::Registration;
use self::ffi::{handle_from_hwnd, hwnd_from_handle, to_wide};
use super::Platform;
use crate::error::{Error, Result};
use crate::model::{Rect, Rgb, WindowHandle, OVERLAY_CLASS_NAME};

/// Win32 backend.
///
/// Holds raw Win32 handles and is therefore neither `Send` nor `Sync`: it
/// stays on the thread that created it, as window ownership requires.
pub struct Win32Platform {
    instance: HINSTANCE,
    /// NUL-terminated UTF-16 name of the registered overlay class.
    class_name: Vec<u16>,
}

impl Win32Platform {
    pub fn new() -> Result<Self> {
        let module = unsafe { GetModuleHandleW(None) }
            .map_err(|e| Error::Startup(format!("GetModuleHandleW: {e}")))?;
        Ok(Self {
            instance: module.into(),
            class_name: to_wide(OVERLAY_CLASS_NAME),
        })
    }
}

impl Platform for Win32Platform {
    fn register_overlay_class(&mut self, name: &str) -> Result<()> {
        let wide = to_wide(name);
        match class::register_class(self.instance, PCWSTR(wide.as_ptr())) {
            Ok(Registration::Registered) => debug!(class = name, "window class registered"),
            Ok(Registration::AlreadyRegistered) => {
                debug!(class = name, "window class already registered")
            }
            Err(code) => {
                return Err(Error::ClassRegistration {
                    class: name.to_string(),
                    code,
                })
            }
        }
        self.class_name = wide;
        Ok(())
    }

    fn create_overlay(&mut self, rect: Rect, color: Rgb, alpha: u8) -> Result<WindowHandle> {
        surface::create_overlay(
            self.instance,
            PCWSTR(self.class_name.as_ptr()),
            rect,
            color,
            alpha,
        )
        .map(handle_from_hwnd)
    }

    fn destroy(&mut self, handle: WindowHandle) {
        if handle.is_null() {
            return;
        }
        if let Err(e) = unsafe { DestroyWindow(hwnd_from_handle(handle)) } {
            warn!(%handle, "DestroyWindow failed: {e}");
        }
    }

    fn query_foreground_rect(&mut self) -> Option<(WindowHandle, Rect)> {
        foreground::query()
    }

    fn pump_one(&mut self) -> bool {
        pump::pump_one()
    }
}
