//! Border sets: four overlay surfaces framing one target rectangle.
//!
//! Given a target `(x, y, w, h)` and thickness `T` the edges are
//!
//! ```text
//! top    (x-T, y-T, w+2T, T)
//! bottom (x-T, y+h, w+2T, T)
//! left   (x-T, y,   T,    h)
//! right  (x+w, y,   T,    h)
//! ```
//!
//! A border set is either fully alive (four handles) or destroyed; creation
//! rolls back on partial failure.

use std::fmt;

use crate::error::{Error, Result};
use crate::model::{BorderStyle, Rect, WindowHandle};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Creation order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Screen rectangle of this edge around `target`.
    ///
    /// Edges that would leave the `i32` coordinate space are clipped to it.
    pub fn frame(self, target: Rect, thickness: i32) -> Rect {
        let t = thickness;
        let outer_left = target.left.saturating_sub(t);
        let outer_right = target.right.saturating_add(t);
        match self {
            Edge::Top => Rect::new(outer_left, target.top.saturating_sub(t), outer_right, target.top),
            Edge::Bottom => Rect::new(
                outer_left,
                target.bottom,
                outer_right,
                target.bottom.saturating_add(t),
            ),
            Edge::Left => Rect::new(outer_left, target.top, target.left, target.bottom),
            Edge::Right => Rect::new(target.right, target.top, outer_right, target.bottom),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        };
        f.write_str(name)
    }
}

/// Edge rectangles in creation order (top, bottom, left, right).
pub fn border_geometry(target: Rect, thickness: i32) -> [Rect; 4] {
    Edge::ALL.map(|edge| edge.frame(target, thickness))
}

/// Four overlay surfaces framing `target`.
///
/// Not released on drop: the handles belong to the platform, so call
/// [`destroy_border_set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderSet {
    target: Rect,
    surfaces: [WindowHandle; 4],
}

impl BorderSet {
    pub fn target(&self) -> Rect {
        self.target
    }

    /// Handles in creation order (top, bottom, left, right).
    pub fn handles(&self) -> [WindowHandle; 4] {
        self.surfaces
    }

    pub fn handle(&self, edge: Edge) -> WindowHandle {
        self.surfaces[edge as usize]
    }

    /// True if `handle` is one of this set's live surfaces.
    pub fn contains(&self, handle: WindowHandle) -> bool {
        !handle.is_null() && self.surfaces.contains(&handle)
    }

    pub fn is_alive(&self) -> bool {
        self.surfaces.iter().all(|h| !h.is_null())
    }

    pub fn is_destroyed(&self) -> bool {
        self.surfaces.iter().all(|h| h.is_null())
    }
}

/// Create the four surfaces around `target` in the order top, bottom,
/// left, right.
///
/// If any creation fails the surfaces already created are destroyed and
/// the caller gets a single [`Error::BorderSetCreation`].
pub fn make_border_set<P>(platform: &mut P, target: Rect, style: &BorderStyle) -> Result<BorderSet>
where
    P: Platform + ?Sized,
{
    let mut surfaces = [WindowHandle::NULL; 4];

    for (i, edge) in Edge::ALL.into_iter().enumerate() {
        let rect = edge.frame(target, style.thickness);
        match platform.create_overlay(rect, style.color, style.alpha) {
            Ok(handle) => surfaces[i] = handle,
            Err(source) => {
                for handle in surfaces[..i].iter().rev() {
                    platform.destroy(*handle);
                }
                return Err(Error::BorderSetCreation {
                    edge,
                    source: Box::new(source),
                });
            }
        }
    }

    Ok(BorderSet { target, surfaces })
}

/// Destroy every surface of `set` and clear its handles. Idempotent.
pub fn destroy_border_set<P>(platform: &mut P, set: &mut BorderSet)
where
    P: Platform + ?Sized,
{
    for handle in set.surfaces.iter_mut() {
        if !handle.is_null() {
            platform.destroy(*handle);
            *handle = WindowHandle::NULL;
        }
    }
}
