//! Overlay tracker: keeps a border set framing the foreground window.
//!
//! Each [`Tracker::tick`] polls the foreground rectangle, compares it with
//! the last framed target and reconciles:
//!
//! ```text
//!  Idle ──(foreground, created)──▶ Tracking(h, R)
//!   ▲                                   │
//!   └──(no foreground / create failed)──┘
//!
//!  Tracking(h, R) ──(h' or R' differ)──▶ Idle ──▶ Tracking(h', R')
//! ```
//!
//! Replacement is strictly destroy-then-create, so there is never more than
//! one border set alive. Failures are logged and retried on the next tick.

use tracing::{debug, error, info, trace};

use crate::border::{destroy_border_set, make_border_set, BorderSet};
use crate::model::{BorderStyle, Rect, WindowHandle};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    Idle,
    Tracking { handle: WindowHandle, rect: Rect },
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No foreground window and no borders.
    StayedIdle,
    /// Same window, same rectangle; nothing touched.
    Unchanged,
    /// Borders created from idle.
    Created,
    /// Old borders destroyed, new ones created.
    Replaced,
    /// Borders removed, now idle.
    Cleared,
    /// Border creation failed; now idle.
    Failed,
}

impl TickOutcome {
    /// True when the tick issued no create or destroy calls.
    pub fn is_steady(&self) -> bool {
        matches!(self, TickOutcome::StayedIdle | TickOutcome::Unchanged)
    }

    pub fn description(&self) -> &'static str {
        match self {
            TickOutcome::StayedIdle => "no foreground window",
            TickOutcome::Unchanged => "foreground unchanged",
            TickOutcome::Created => "borders created",
            TickOutcome::Replaced => "borders replaced",
            TickOutcome::Cleared => "borders removed",
            TickOutcome::Failed => "border creation failed",
        }
    }
}

pub struct Tracker<P: Platform> {
    platform: P,
    style: BorderStyle,
    current: Option<BorderSet>,
    last_target: Option<(WindowHandle, Rect)>,
    ticks: u64,
}

impl<P: Platform> Tracker<P> {
    pub fn new(platform: P, mut style: BorderStyle) -> Self {
        style.validate();
        Self {
            platform,
            style,
            current: None,
            last_target: None,
            ticks: 0,
        }
    }

    /// Run one reconciliation step.
    pub fn tick(&mut self) -> TickOutcome {
        self.ticks += 1;

        let observed = match self.platform.query_foreground_rect() {
            Some((handle, _)) if self.is_own_overlay(handle) => {
                debug!(%handle, "foreground is one of our overlays, ignoring");
                None
            }
            other => other,
        };

        let outcome = match observed {
            None => self.clear(),
            // Degenerate targets are never installed, so this always clears.
            Some((_, rect)) if rect.is_degenerate() => {
                debug!(%rect, "degenerate foreground rectangle");
                self.clear()
            }
            Some(target) if self.last_target == Some(target) => TickOutcome::Unchanged,
            Some((handle, rect)) => self.replace(handle, rect),
        };

        if outcome.is_steady() {
            trace!(tick = self.ticks, "{}", outcome.description());
        } else {
            debug!(tick = self.ticks, "{}", outcome.description());
        }
        debug_assert_eq!(self.current.is_some(), self.last_target.is_some());
        outcome
    }

    /// Destroy any live borders. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.release_borders() {
            info!("borders removed on shutdown");
        }
    }

    pub fn state(&self) -> TrackerState {
        match self.last_target {
            Some((handle, rect)) => TrackerState::Tracking { handle, rect },
            None => TrackerState::Idle,
        }
    }

    pub fn current_borders(&self) -> Option<&BorderSet> {
        self.current.as_ref()
    }

    pub fn last_target(&self) -> Option<(WindowHandle, Rect)> {
        self.last_target
    }

    pub fn style(&self) -> &BorderStyle {
        &self.style
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    fn is_own_overlay(&self, handle: WindowHandle) -> bool {
        self.current
            .as_ref()
            .is_some_and(|set| set.contains(handle))
    }

    fn clear(&mut self) -> TickOutcome {
        if self.release_borders() {
            debug!("tracking -> idle");
            TickOutcome::Cleared
        } else {
            TickOutcome::StayedIdle
        }
    }

    fn replace(&mut self, handle: WindowHandle, rect: Rect) -> TickOutcome {
        let replaced = self.release_borders();

        match make_border_set(&mut self.platform, rect, &self.style) {
            Ok(set) => {
                self.current = Some(set);
                self.last_target = Some((handle, rect));
                info!(%handle, %rect, "tracking window");
                if replaced {
                    TickOutcome::Replaced
                } else {
                    TickOutcome::Created
                }
            }
            Err(e) => {
                error!(%handle, %rect, "failed to create border windows: {e}");
                TickOutcome::Failed
            }
        }
    }

    /// Destroy the current border set, if any, and forget the target.
    fn release_borders(&mut self) -> bool {
        self.last_target = None;
        match self.current.take() {
            Some(mut set) => {
                destroy_border_set(&mut self.platform, &mut set);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockPlatform;

    const R: Rect = Rect::new(100, 200, 500, 600);
    const H: WindowHandle = WindowHandle(42);

    fn tracker(mock: MockPlatform) -> Tracker<MockPlatform> {
        Tracker::new(mock, BorderStyle::default())
    }

    #[test]
    fn starts_idle() {
        let t = tracker(MockPlatform::new());
        assert_eq!(t.state(), TrackerState::Idle);
        assert!(t.current_borders().is_none());
        assert_eq!(t.ticks(), 0);
    }

    #[test]
    fn style_is_validated_on_construction() {
        let style = BorderStyle {
            thickness: -3,
            ..Default::default()
        };
        let t = Tracker::new(MockPlatform::new(), style);
        assert_eq!(t.style().thickness, crate::model::MIN_THICKNESS);
    }

    #[test]
    fn degenerate_rect_clears_borders() {
        let mock = MockPlatform::new().with_foreground([
            Some((H, R)),
            Some((H, Rect::new(10, 10, 10, 10))),
        ]);
        let mut t = tracker(mock);
        assert_eq!(t.tick(), TickOutcome::Created);
        assert_eq!(t.tick(), TickOutcome::Cleared);
        assert_eq!(t.state(), TrackerState::Idle);
        assert_eq!(t.platform().live_count(), 0);
    }

    #[test]
    fn repeated_degenerate_rect_stays_idle() {
        let flat = Rect::new(100, 200, 500, 200);
        let mock =
            MockPlatform::new().with_foreground([Some((H, R)), Some((H, flat)), Some((H, flat))]);
        let mut t = tracker(mock);
        assert_eq!(t.tick(), TickOutcome::Created);
        assert_eq!(t.tick(), TickOutcome::Cleared);
        assert_eq!(t.tick(), TickOutcome::StayedIdle);
        assert_eq!(t.platform().create_attempts(), 4);
        assert_eq!(t.platform().live_count(), 0);
    }

    #[test]
    fn degenerate_rect_while_idle_stays_idle() {
        let mock = MockPlatform::new().with_foreground([Some((H, Rect::new(0, 0, -5, 20)))]);
        let mut t = tracker(mock);
        assert_eq!(t.tick(), TickOutcome::StayedIdle);
        assert_eq!(t.platform().create_attempts(), 0);
    }

    #[test]
    fn own_overlay_as_foreground_is_treated_as_none() {
        let mock = MockPlatform::new().with_foreground([Some((H, R))]);
        let mut t = tracker(mock);
        t.tick();
        let own = t.current_borders().unwrap().handles()[2];

        t.platform_mut()
            .push_foreground(Some((own, Rect::from_xywh(95, 200, 5, 400))));
        assert_eq!(t.tick(), TickOutcome::Cleared);
        assert_eq!(t.platform().live_count(), 0);
        assert_eq!(t.platform().create_attempts(), 4);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mock = MockPlatform::new().with_foreground([Some((H, R))]);
        let mut t = tracker(mock);
        t.tick();
        t.shutdown();
        t.shutdown();
        assert_eq!(t.state(), TrackerState::Idle);
        assert_eq!(t.platform().destroyed().len(), 4);
        assert_eq!(t.platform().stale_destroys(), 0);
    }

    #[test]
    fn outcome_descriptions() {
        let all = [
            TickOutcome::StayedIdle,
            TickOutcome::Unchanged,
            TickOutcome::Created,
            TickOutcome::Replaced,
            TickOutcome::Cleared,
            TickOutcome::Failed,
        ];
        for outcome in all {
            assert!(!outcome.description().is_empty());
        }
        assert!(TickOutcome::Unchanged.is_steady());
        assert!(TickOutcome::StayedIdle.is_steady());
        assert!(!TickOutcome::Failed.is_steady());
    }
}
