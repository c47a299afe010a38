//! End-to-end tracker scenarios against the recording platform.

mod common;

use common::*;
use focusframe::platform::mock::{Call, MockPlatform};
use focusframe::{Rect, TickOutcome, TrackerState};

// === Scenarios ===

#[test]
fn startup_without_foreground_creates_nothing() {
    let mut t = tracker_with(vec![None]);
    for _ in 0..5 {
        assert_eq!(t.tick(), TickOutcome::StayedIdle);
        assert_invariants(&t);
    }
    assert_eq!(t.platform().create_attempts(), 0);
    assert_eq!(t.state(), TrackerState::Idle);
}

#[test]
fn steady_focus_creates_four_overlays_once() {
    let mut t = tracker_with(vec![Some((H1, R1))]);

    assert_eq!(t.tick(), TickOutcome::Created);
    assert_eq!(
        t.platform().created_rects(),
        vec![
            Rect::from_xywh(95, 195, 410, 5),
            Rect::from_xywh(95, 600, 410, 5),
            Rect::from_xywh(95, 200, 5, 400),
            Rect::from_xywh(500, 200, 5, 400),
        ]
    );

    for _ in 0..10 {
        assert_eq!(t.tick(), TickOutcome::Unchanged);
        assert_invariants(&t);
    }
    assert_eq!(t.platform().create_attempts(), 4);
    assert!(t.platform().destroyed().is_empty());
    assert_eq!(
        t.state(),
        TrackerState::Tracking {
            handle: H1,
            rect: R1
        }
    );
}

#[test]
fn focus_change_destroys_then_recreates() {
    let mut t = tracker_with(vec![
        Some((H1, R1)),
        Some((H1, R1)),
        Some((H1, R1)),
        Some((H2, R2)),
    ]);

    for _ in 0..3 {
        t.tick();
    }
    let first = t.current_borders().unwrap().handles();
    t.platform_mut().clear_calls();

    assert_eq!(t.tick(), TickOutcome::Replaced);
    assert_invariants(&t);

    let calls = t.platform().calls();
    // query, 4 destroys, 4 creates
    assert_eq!(calls.len(), 9);
    assert_eq!(calls[0], Call::Query);
    let destroyed: Vec<_> = calls[1..5]
        .iter()
        .map(|c| match c {
            Call::Destroy(h) => *h,
            other => panic!("expected destroy, got {other:?}"),
        })
        .collect();
    assert_eq!(destroyed, first.to_vec());
    assert!(calls[5..]
        .iter()
        .all(|c| matches!(c, Call::Create { handle: Some(_), .. })));
    assert_eq!(t.platform().created_rects(), geometry(R2));

    // Later ticks keep the new borders
    t.tick();
    assert_eq!(t.platform().created_rects().len(), 4);
}

#[test]
fn focus_loss_removes_borders() {
    let mut t = tracker_with(vec![Some((H1, R1)), None]);

    assert_eq!(t.tick(), TickOutcome::Created);
    assert_eq!(t.tick(), TickOutcome::Cleared);
    assert_invariants(&t);

    assert_eq!(t.platform().destroyed().len(), 4);
    assert!(t.current_borders().is_none());
    assert!(t.last_target().is_none());

    assert_eq!(t.tick(), TickOutcome::StayedIdle);
    assert!(t.current_borders().is_none());
}

#[test]
fn creation_failure_rolls_back_and_retries() {
    let mut t = tracker_on(
        MockPlatform::new()
            .with_foreground([Some((H1, R1))])
            .fail_create_on(3),
    );

    assert_eq!(t.tick(), TickOutcome::Failed);
    assert_invariants(&t);

    let created: Vec<_> = t
        .platform()
        .calls()
        .iter()
        .filter_map(|c| match c {
            Call::Create {
                handle: Some(h), ..
            } => Some(*h),
            _ => None,
        })
        .collect();
    assert_eq!(created.len(), 2);
    let mut destroyed = t.platform().destroyed();
    destroyed.sort_by_key(|h| h.0);
    assert_eq!(destroyed, created);
    assert!(t.current_borders().is_none());
    assert!(t.last_target().is_none());

    // Next tick retries and succeeds
    assert_eq!(t.tick(), TickOutcome::Created);
    assert_invariants(&t);
    assert_eq!(t.platform().live_count(), 4);
}

#[test]
fn failure_on_first_edge_leaves_nothing() {
    let mut t = tracker_on(
        MockPlatform::new()
            .with_foreground([Some((H1, R1))])
            .fail_create_on(1),
    );

    assert_eq!(t.tick(), TickOutcome::Failed);
    assert!(t.platform().destroyed().is_empty());
    assert_invariants(&t);
}

#[test]
fn same_rect_new_handle_forces_recreate() {
    let mut t = tracker_with(vec![Some((H1, R1)), Some((H2, R1))]);

    assert_eq!(t.tick(), TickOutcome::Created);
    let first = t.current_borders().unwrap().handles();

    assert_eq!(t.tick(), TickOutcome::Replaced);
    assert_invariants(&t);
    assert_eq!(t.platform().destroyed(), first.to_vec());
    assert_eq!(t.platform().created_rects().len(), 8);
    assert_eq!(t.last_target(), Some((H2, R1)));
}

// === Invariants ===

#[test]
fn moving_window_replaces_borders_each_time() {
    let positions: Vec<_> = (0..5)
        .map(|i| Some((H1, Rect::from_xywh(10 * i, 0, 300, 200))))
        .collect();
    let mut t = tracker_with(positions);

    for i in 0..5 {
        let outcome = t.tick();
        if i == 0 {
            assert_eq!(outcome, TickOutcome::Created);
        } else {
            assert_eq!(outcome, TickOutcome::Replaced);
        }
        assert_invariants(&t);
        assert_eq!(t.platform().live_count(), 4);
    }
}

#[test]
fn resource_count_is_zero_or_four_after_any_sequence() {
    let script = vec![
        Some((H1, R1)),
        None,
        Some((H2, R2)),
        Some((H2, R2)),
        Some((H1, R2)),
        Some((H1, Rect::new(0, 0, 0, 0))),
        Some((H2, R1)),
        None,
        None,
        Some((H1, R1)),
    ];
    let mut t = tracker_with(script);

    for _ in 0..10 {
        t.tick();
        assert_invariants(&t);
        let expected = if t.current_borders().is_some() { 4 } else { 0 };
        assert_eq!(t.platform().live_count(), expected);
    }

    t.shutdown();
    assert_eq!(t.platform().live_count(), 0);
}

#[test]
fn own_overlay_reported_as_foreground_is_ignored() {
    let mut t = tracker_with(vec![]);

    for edge in 0..4 {
        t.platform_mut().push_foreground(Some((H1, R1)));
        assert_eq!(t.tick(), TickOutcome::Created);

        let own = t.current_borders().unwrap().handles()[edge];
        t.platform_mut().push_foreground(Some((own, R2)));
        assert_eq!(t.tick(), TickOutcome::Cleared);
        assert!(t.last_target().is_none());
        assert_invariants(&t);
    }
}

#[test]
fn create_then_destroy_is_resource_neutral() {
    let mut t = tracker_with(vec![Some((H1, R1))]);
    let before = t.platform().live_count();
    t.tick();
    t.shutdown();
    assert_eq!(t.platform().live_count(), before);
}

#[test]
fn overlays_use_style_color_and_alpha() {
    let mut t = tracker_with(vec![Some((H1, R1))]);
    t.tick();
    let style = *t.style();
    for call in t.platform().calls() {
        if let Call::Create { color, alpha, .. } = call {
            assert_eq!(*color, style.color);
            assert_eq!(*alpha, style.alpha);
        }
    }
}

#[test]
fn window_at_coordinate_limit_is_framed_without_overflow() {
    let edge_of_space = Rect::new(i32::MAX - 400, 0, i32::MAX - 2, 300);
    let mut t = tracker_with(vec![Some((H1, edge_of_space))]);

    assert_eq!(t.tick(), TickOutcome::Created);
    assert_invariants(&t);

    let rects = t.platform().created_rects();
    assert_eq!(rects.len(), 4);
    assert!(rects.iter().all(|r| r.right == i32::MAX || r.right == edge_of_space.left));
    assert_eq!(rects, geometry(edge_of_space));

    assert_eq!(t.tick(), TickOutcome::Unchanged);
    t.shutdown();
    assert_eq!(t.platform().live_count(), 0);
}
