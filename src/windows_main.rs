//! Windows entry point.
//!
//! Everything runs on the main thread: class registration, overlay
//! creation, the message pump and the tracker.

use tracing::{error, info, warn};

use focusframe::logging;
use focusframe::model::constants::OVERLAY_CLASS_NAME;
use focusframe::platform::windows::{process, Win32Platform};
use focusframe::{runtime, BorderStyle, Platform, Schedule, Tracker};

/// Main entry point for Windows.
pub fn run() {
    logging::init();

    match run_app() {
        Ok(()) => {}
        Err(e) if e.is_fatal() => {
            error!("{e}");
            std::process::exit(1);
        }
        Err(e) => warn!("{e}"),
    }
}

fn run_app() -> focusframe::Result<()> {
    info!("focusframe {} started", env!("CARGO_PKG_VERSION"));

    process::enable_dpi_awareness();
    process::install_console_handler();

    let mut platform = Win32Platform::new()?;
    platform.register_overlay_class(OVERLAY_CLASS_NAME)?;

    let style = BorderStyle::default();
    info!(
        thickness = style.thickness,
        color = %style.color,
        alpha = style.alpha,
        "border style"
    );

    let mut tracker = Tracker::new(platform, style);
    runtime::run(&mut tracker, Schedule::default(), |_| {
        process::shutdown_requested()
    });
    process::mark_teardown_complete();

    info!(ticks = tracker.ticks(), "focusframe stopped");
    Ok(())
}
