//! Thread message pump.

use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, PeekMessageW, TranslateMessage, MSG, PM_REMOVE, WM_QUIT,
};

use super::process;

/// Peek one message for the calling thread and dispatch it.
///
/// Returns `false` without waiting when the queue is empty. A `WM_QUIT`
/// is turned into a shutdown request instead of being dispatched.
pub fn pump_one() -> bool {
    let mut msg = MSG::default();
    unsafe {
        if !PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
            return false;
        }
        if msg.message == WM_QUIT {
            process::request_shutdown();
            return true;
        }
        let _ = TranslateMessage(&msg);
        DispatchMessageW(&msg);
    }
    true
}
