//! Creation of a single styled overlay surface.
//!
//! The window is filled by drawing into an off-screen bitmap and handing it
//! to `UpdateLayeredWindow` with a constant source alpha. Every GDI
//! resource is held by a guard, so all of them are released in reverse
//! acquisition order on every exit path. The window itself stays guarded
//! until it is shown.

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{COLORREF, HINSTANCE, HWND, POINT, RECT, SIZE};
use windows::Win32::Graphics::Gdi::{
    CreateCompatibleBitmap, CreateCompatibleDC, CreateSolidBrush, DeleteDC, DeleteObject,
    FillRect, GetDC, ReleaseDC, SelectObject, AC_SRC_OVER, BLENDFUNCTION, HBITMAP, HBRUSH, HDC,
    HGDIOBJ,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DestroyWindow, ShowWindow, UpdateLayeredWindow, SW_SHOWNOACTIVATE,
    ULW_ALPHA, WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST,
    WS_EX_TRANSPARENT, WS_POPUP,
};

use super::ffi::last_error_code;
use crate::error::{Error, Result, SurfaceStep};
use crate::model::{Rect, Rgb};

fn failed(step: SurfaceStep, code: u32) -> Error {
    Error::SurfaceCreation { step, code }
}

/// Create, fill and show one overlay window.
pub fn create_overlay(
    instance: HINSTANCE,
    class_name: PCWSTR,
    rect: Rect,
    color: Rgb,
    alpha: u8,
) -> Result<HWND> {
    let (x, y, width, height) = (rect.x(), rect.y(), rect.width(), rect.height());

    // Tool window keeps the overlay out of the taskbar and out of the
    // foreground candidates; transparent makes it click-through.
    let ex_style =
        WS_EX_LAYERED | WS_EX_TOPMOST | WS_EX_TOOLWINDOW | WS_EX_TRANSPARENT | WS_EX_NOACTIVATE;

    let hwnd = unsafe {
        CreateWindowExW(
            ex_style,
            class_name,
            w!(""),
            WS_POPUP,
            x,
            y,
            width,
            height,
            None,
            None,
            Some(instance),
            None,
        )
    }
    .map_err(|e| failed(SurfaceStep::CreateWindow, e.code().0 as u32))?;
    let window = WindowGuard(Some(hwnd));

    let screen = ScreenDc::get()?;
    let memory = MemoryDc::compatible_with(&screen)?;
    let bitmap = Bitmap::compatible_with(&screen, width, height)?;
    let _selection = Selection::select(&memory, &bitmap)?;
    let brush = Brush::solid(color)?;

    let fill_rect = RECT {
        left: 0,
        top: 0,
        right: width,
        bottom: height,
    };
    if unsafe { FillRect(memory.0, &fill_rect, brush.0) } == 0 {
        return Err(failed(SurfaceStep::Fill, last_error_code()));
    }

    let pt_src = POINT { x: 0, y: 0 };
    let pt_dst = POINT { x, y };
    let size = SIZE {
        cx: width,
        cy: height,
    };
    // Constant alpha only; the bitmap's own alpha channel is ignored.
    let blend = BLENDFUNCTION {
        BlendOp: AC_SRC_OVER as u8,
        BlendFlags: 0,
        SourceConstantAlpha: alpha,
        AlphaFormat: 0,
    };

    unsafe {
        UpdateLayeredWindow(
            hwnd,
            Some(screen.0),
            Some(&pt_dst),
            Some(&size),
            Some(memory.0),
            Some(&pt_src),
            COLORREF(0),
            Some(&blend),
            ULW_ALPHA,
        )
    }
    .map_err(|e| failed(SurfaceStep::UpdateLayered, e.code().0 as u32))?;

    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOWNOACTIVATE);
    }

    Ok(window.release())
}

/// Destroys the window unless released.
struct WindowGuard(Option<HWND>);

impl WindowGuard {
    fn release(mut self) -> HWND {
        self.0.take().unwrap_or_default()
    }
}

impl Drop for WindowGuard {
    fn drop(&mut self) {
        if let Some(hwnd) = self.0.take() {
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
        }
    }
}

struct ScreenDc(HDC);

impl ScreenDc {
    fn get() -> Result<Self> {
        let dc = unsafe { GetDC(None) };
        if dc.is_invalid() {
            return Err(failed(SurfaceStep::ScreenDc, last_error_code()));
        }
        Ok(Self(dc))
    }
}

impl Drop for ScreenDc {
    fn drop(&mut self) {
        unsafe {
            ReleaseDC(None, self.0);
        }
    }
}

struct MemoryDc(HDC);

impl MemoryDc {
    fn compatible_with(screen: &ScreenDc) -> Result<Self> {
        let dc = unsafe { CreateCompatibleDC(Some(screen.0)) };
        if dc.is_invalid() {
            return Err(failed(SurfaceStep::MemoryDc, last_error_code()));
        }
        Ok(Self(dc))
    }
}

impl Drop for MemoryDc {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteDC(self.0);
        }
    }
}

struct Bitmap(HBITMAP);

impl Bitmap {
    fn compatible_with(screen: &ScreenDc, width: i32, height: i32) -> Result<Self> {
        let bitmap = unsafe { CreateCompatibleBitmap(screen.0, width, height) };
        if bitmap.is_invalid() {
            return Err(failed(SurfaceStep::Bitmap, last_error_code()));
        }
        Ok(Self(bitmap))
    }
}

impl Drop for Bitmap {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteObject(self.0.into());
        }
    }
}

/// Bitmap selected into a memory DC; restores the previous object on drop.
struct Selection {
    dc: HDC,
    previous: HGDIOBJ,
}

impl Selection {
    fn select(memory: &MemoryDc, bitmap: &Bitmap) -> Result<Self> {
        let previous = unsafe { SelectObject(memory.0, bitmap.0.into()) };
        // NULL or HGDI_ERROR
        if previous.is_invalid() || previous.0 as isize == -1 {
            return Err(failed(SurfaceStep::SelectBitmap, last_error_code()));
        }
        Ok(Self {
            dc: memory.0,
            previous,
        })
    }
}

impl Drop for Selection {
    fn drop(&mut self) {
        unsafe {
            SelectObject(self.dc, self.previous);
        }
    }
}

struct Brush(HBRUSH);

impl Brush {
    fn solid(color: Rgb) -> Result<Self> {
        let brush = unsafe { CreateSolidBrush(COLORREF(color.to_colorref())) };
        if brush.is_invalid() {
            return Err(failed(SurfaceStep::Brush, last_error_code()));
        }
        Ok(Self(brush))
    }
}

impl Drop for Brush {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteObject(self.0.into());
        }
    }
}
