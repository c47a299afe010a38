//! Single-thread cooperative scheduler.
//!
//! The event pump and the tracker share the calling thread, which must be
//! the one that created the platform. The loop alternates between them:
//!
//! ```text
//! ┌──────────────┐  one message   ┌──────────────┐
//! │  pump_one()  │ ─────────────▶ │ tick due?    │──yes──▶ tracker.tick()
//! └──────────────┘                └──────────────┘
//!        ▲                              │ no, queue empty
//!        └──────── sleep ≤ pump slice ◀─┘
//! ```
//!
//! The pump yields after every message and never waits on the queue, so
//! neither side starves the other. Ticks never overlap.

use std::thread;
use std::time::{Duration, Instant};

use tracing::info;

use crate::model::constants::{POLL_INTERVAL_MS, PUMP_SLICE_MS};
use crate::platform::Platform;
use crate::tracker::Tracker;

/// Timing of the cooperative loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// Delay between two tracker ticks.
    pub poll_interval: Duration,
    /// Longest idle sleep before the queue is peeked again.
    pub pump_slice: Duration,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            pump_slice: Duration::from_millis(PUMP_SLICE_MS),
        }
    }
}

/// Run the pump and the tracker until `should_stop` returns true, then
/// remove any live borders.
///
/// This is the process's event pump: the queue is serviced one message at
/// a time for as long as the loop runs. The first tick runs immediately.
pub fn run<P, F>(tracker: &mut Tracker<P>, schedule: Schedule, mut should_stop: F)
where
    P: Platform,
    F: FnMut(&Tracker<P>) -> bool,
{
    info!(
        poll_ms = schedule.poll_interval.as_millis() as u64,
        "tracking foreground window"
    );

    let mut next_tick = Instant::now();
    while !should_stop(tracker) {
        let dispatched = tracker.platform_mut().pump_one();

        let now = Instant::now();
        if now >= next_tick {
            tracker.tick();
            next_tick = now + schedule.poll_interval;
        } else if !dispatched {
            thread::sleep(schedule.pump_slice.min(next_tick - now));
        }
    }

    tracker.shutdown();
}
