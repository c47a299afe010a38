//! Process-wide setup: DPI awareness and console shutdown handling.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};
use windows::core::BOOL;
use windows::Win32::System::Console::{
    SetConsoleCtrlHandler, CTRL_BREAK_EVENT, CTRL_CLOSE_EVENT, CTRL_C_EVENT, CTRL_LOGOFF_EVENT,
    CTRL_SHUTDOWN_EVENT,
};
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);
static TEARDOWN_DONE: AtomicBool = AtomicBool::new(false);

/// How long a close/logoff/shutdown notification holds the process open
/// while the main thread removes the borders. Windows allows about 5 s.
const TEARDOWN_WAIT: Duration = Duration::from_secs(2);
const TEARDOWN_POLL: Duration = Duration::from_millis(10);

pub fn request_shutdown() {
    SHUTDOWN.store(true, Ordering::SeqCst);
}

pub fn shutdown_requested() -> bool {
    SHUTDOWN.load(Ordering::SeqCst)
}

/// Called by the main thread once the borders are gone.
pub fn mark_teardown_complete() {
    TEARDOWN_DONE.store(true, Ordering::SeqCst);
}

/// Poll `flag` until it is set or `timeout` elapses. Returns the final value.
fn wait_for(flag: &AtomicBool, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while !flag.load(Ordering::SeqCst) {
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(TEARDOWN_POLL);
    }
    true
}

/// Runs on a system thread.
///
/// Ctrl+C and Ctrl+Break only flip the shutdown flag. For close, logoff and
/// shutdown the process is terminated as soon as this returns, so it waits
/// for the main thread to finish teardown first.
unsafe extern "system" fn console_ctrl_handler(ctrl_type: u32) -> BOOL {
    match ctrl_type {
        CTRL_C_EVENT | CTRL_BREAK_EVENT => {
            request_shutdown();
            BOOL(1)
        }
        CTRL_CLOSE_EVENT | CTRL_LOGOFF_EVENT | CTRL_SHUTDOWN_EVENT => {
            request_shutdown();
            wait_for(&TEARDOWN_DONE, TEARDOWN_WAIT);
            BOOL(1)
        }
        _ => BOOL(0),
    }
}

/// Route Ctrl+C and console close to [`request_shutdown`].
pub fn install_console_handler() {
    if let Err(e) = unsafe { SetConsoleCtrlHandler(Some(console_ctrl_handler), true) } {
        warn!("SetConsoleCtrlHandler failed, borders will not be removed on Ctrl+C: {e}");
    }
}

/// Ask for per-monitor DPI awareness so window rectangles and overlay
/// positions are both in physical pixels.
pub fn enable_dpi_awareness() {
    match unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) } {
        Ok(()) => info!("per-monitor DPI awareness enabled"),
        // Already set (manifest or an earlier call)
        Err(e) => warn!("SetProcessDpiAwarenessContext failed: {e}"),
    }
}
