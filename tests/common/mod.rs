//! Shared helpers for the integration tests.
#![allow(dead_code)]

use focusframe::border::border_geometry;
use focusframe::platform::mock::MockPlatform;
use focusframe::{BorderStyle, Rect, Tracker, WindowHandle};

pub const H1: WindowHandle = WindowHandle(0x1);
pub const H2: WindowHandle = WindowHandle(0x2);

/// `(100, 200)` to `(500, 600)`: the reference 400x400 window.
pub const R1: Rect = Rect::new(100, 200, 500, 600);
pub const R2: Rect = Rect::new(-300, 50, 900, 850);

pub fn tracker_on(mock: MockPlatform) -> Tracker<MockPlatform> {
    Tracker::new(mock, BorderStyle::default())
}

pub fn tracker_with(answers: Vec<Option<(WindowHandle, Rect)>>) -> Tracker<MockPlatform> {
    tracker_on(MockPlatform::new().with_foreground(answers))
}

pub fn geometry(target: Rect) -> Vec<Rect> {
    border_geometry(target, BorderStyle::default().thickness).to_vec()
}

/// Checks the tracker invariants that must hold between ticks:
/// no partial borders, borders frame the last target, and the mock holds
/// exactly the border set's surfaces.
pub fn assert_invariants(tracker: &Tracker<MockPlatform>) {
    let mock = tracker.platform();
    match (tracker.current_borders(), tracker.last_target()) {
        (Some(set), Some((_, rect))) => {
            assert!(set.is_alive(), "partial border set");
            assert_eq!(set.target(), rect);
            let mut live = mock.live_handles();
            let mut handles = set.handles().to_vec();
            live.sort_by_key(|h| h.0);
            handles.sort_by_key(|h| h.0);
            assert_eq!(live, handles);
        }
        (None, None) => assert_eq!(mock.live_count(), 0, "leaked overlays while idle"),
        (borders, target) => panic!("state mismatch: {borders:?} vs {target:?}"),
    }
    assert_eq!(mock.stale_destroys(), 0, "overlay destroyed twice");
}
