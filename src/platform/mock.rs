//! Recording platform used by the tracker tests.
//!
//! Foreground answers are scripted per query; once the script runs out the
//! last answer repeats. Every create/destroy is logged and live handles are
//! counted so resource-neutrality can be asserted.

use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::error::{Error, Result, SurfaceStep};
use crate::model::{Rect, Rgb, WindowHandle};

use super::Platform;

/// First handle value handed out by the mock.
const FIRST_HANDLE: isize = 0x1000;

/// One recorded platform call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    RegisterClass(String),
    /// `handle` is `None` when the creation was made to fail.
    Create {
        rect: Rect,
        color: Rgb,
        alpha: u8,
        handle: Option<WindowHandle>,
    },
    Destroy(WindowHandle),
    Query,
}

#[derive(Debug, Default)]
pub struct MockPlatform {
    script: VecDeque<Option<(WindowHandle, Rect)>>,
    last_answer: Option<(WindowHandle, Rect)>,
    failing_creates: HashSet<usize>,
    fail_registration: bool,
    create_attempts: usize,
    next_handle: isize,
    live: BTreeSet<WindowHandle>,
    stale_destroys: usize,
    pending_messages: usize,
    dispatched: usize,
    registered: HashSet<String>,
    calls: Vec<Call>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            next_handle: FIRST_HANDLE,
            ..Default::default()
        }
    }

    /// Queue foreground answers, one per query.
    pub fn with_foreground<I>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = Option<(WindowHandle, Rect)>>,
    {
        self.script.extend(answers);
        self
    }

    /// Make the `n`th `create_overlay` call (1-based, counted over the
    /// mock's lifetime) fail.
    pub fn fail_create_on(mut self, n: usize) -> Self {
        self.failing_creates.insert(n);
        self
    }

    pub fn fail_registration(mut self) -> Self {
        self.fail_registration = true;
        self
    }

    /// Append one foreground answer to the script.
    pub fn push_foreground(&mut self, answer: Option<(WindowHandle, Rect)>) {
        self.script.push_back(answer);
    }

    /// Pretend `n` messages arrived on the thread queue.
    pub fn post_messages(&mut self, n: usize) {
        self.pending_messages += n;
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Rectangles of successful creations, in call order.
    pub fn created_rects(&self) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Create {
                    rect,
                    handle: Some(_),
                    ..
                } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Handles passed to `destroy`, in call order.
    pub fn destroyed(&self) -> Vec<WindowHandle> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Destroy(h) => Some(*h),
                _ => None,
            })
            .collect()
    }

    pub fn create_attempts(&self) -> usize {
        self.create_attempts
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn live_handles(&self) -> Vec<WindowHandle> {
        self.live.iter().copied().collect()
    }

    /// Destroy calls on handles that were not alive.
    pub fn stale_destroys(&self) -> usize {
        self.stale_destroys
    }

    pub fn pending_messages(&self) -> usize {
        self.pending_messages
    }

    pub fn dispatched_messages(&self) -> usize {
        self.dispatched
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.registered.contains(name)
    }
}

impl Platform for MockPlatform {
    fn register_overlay_class(&mut self, name: &str) -> Result<()> {
        self.calls.push(Call::RegisterClass(name.to_string()));
        if self.fail_registration {
            return Err(Error::ClassRegistration {
                class: name.to_string(),
                code: 5,
            });
        }
        self.registered.insert(name.to_string());
        Ok(())
    }

    fn create_overlay(&mut self, rect: Rect, color: Rgb, alpha: u8) -> Result<WindowHandle> {
        self.create_attempts += 1;
        if self.failing_creates.contains(&self.create_attempts) {
            self.calls.push(Call::Create {
                rect,
                color,
                alpha,
                handle: None,
            });
            return Err(Error::SurfaceCreation {
                step: SurfaceStep::CreateWindow,
                code: 1400,
            });
        }

        let handle = WindowHandle(self.next_handle);
        self.next_handle += 1;
        self.live.insert(handle);
        self.calls.push(Call::Create {
            rect,
            color,
            alpha,
            handle: Some(handle),
        });
        Ok(handle)
    }

    fn destroy(&mut self, handle: WindowHandle) {
        if handle.is_null() {
            return;
        }
        self.calls.push(Call::Destroy(handle));
        if !self.live.remove(&handle) {
            self.stale_destroys += 1;
        }
    }

    fn query_foreground_rect(&mut self) -> Option<(WindowHandle, Rect)> {
        self.calls.push(Call::Query);
        if let Some(answer) = self.script.pop_front() {
            self.last_answer = answer;
        }
        self.last_answer
    }

    fn pump_one(&mut self) -> bool {
        if self.pending_messages == 0 {
            return false;
        }
        self.pending_messages -= 1;
        self.dispatched += 1;
        true
    }
}
