// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic host double for frame-driven tests.
//!
//! [`ManualFrames`] implements
//! [`FrameScheduler`](limelight_core::backend::FrameScheduler) by queueing
//! callbacks until the test calls [`fire`](ManualFrames::fire), which plays
//! the role of the browser's frame boundary. A simulated clock advances by a
//! fixed refresh interval per boundary.
//!
//! ```rust,ignore
//! let frames = Rc::new(ManualFrames::new(RefreshRate::HZ_60));
//! let c = Coalescer::new(CoalescerId::PARALLAX, Rc::clone(&frames), 0.0);
//! c.record_position(100.0);
//! c.request_update(|y| seen.set(y));
//! assert_eq!(frames.fire(), 1);
//! ```

#![no_std]

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use limelight_core::backend::{FrameCallback, FrameScheduler};
use limelight_core::time::{Duration, HostTime};
use limelight_core::timing::FrameTick;

/// Interval between simulated frame boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RefreshRate {
    /// Time between boundaries.
    pub interval: Duration,
}

impl RefreshRate {
    /// A 60 Hz display (16 667 µs per frame).
    pub const HZ_60: Self = Self {
        interval: Duration(16_667),
    };

    /// A 120 Hz display (8 333 µs per frame).
    pub const HZ_120: Self = Self {
        interval: Duration(8_333),
    };
}

/// A [`FrameScheduler`] whose frames fire only when the test says so.
///
/// Callbacks requested while a boundary is being fired go to the *next*
/// boundary, matching `requestAnimationFrame`.
pub struct ManualFrames {
    queue: RefCell<VecDeque<FrameCallback>>,
    rate: RefreshRate,
    now: Cell<HostTime>,
    frame_index: Cell<u64>,
    requested: Cell<u64>,
}

impl ManualFrames {
    /// Creates a scheduler with an empty queue at time zero.
    #[must_use]
    pub fn new(rate: RefreshRate) -> Self {
        Self {
            queue: RefCell::new(VecDeque::new()),
            rate,
            now: Cell::new(HostTime(0)),
            frame_index: Cell::new(0),
            requested: Cell::new(0),
        }
    }

    /// Number of callbacks waiting for the next boundary.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Total callbacks ever requested.
    #[must_use]
    pub fn requested(&self) -> u64 {
        self.requested.get()
    }

    /// Number of boundaries fired so far.
    #[must_use]
    pub fn frames_fired(&self) -> u64 {
        self.frame_index.get()
    }

    /// Current simulated time.
    #[must_use]
    pub fn now(&self) -> HostTime {
        self.now.get()
    }

    /// Advances the clock one refresh interval and runs every callback that
    /// was queued before this call, in request order.
    ///
    /// Returns the number of callbacks run.
    pub fn fire(&self) -> usize {
        let batch: Vec<FrameCallback> = self.queue.borrow_mut().drain(..).collect();
        let now = self.now.get() + self.rate.interval;
        self.now.set(now);
        let index = self.frame_index.get();
        self.frame_index.set(index + 1);

        let tick = FrameTick::new(now, index);
        let count = batch.len();
        for callback in batch {
            callback(tick);
        }
        count
    }

    /// Fires `n` boundaries and returns the total callbacks run.
    pub fn fire_n(&self, n: usize) -> usize {
        (0..n).map(|_| self.fire()).sum()
    }

    /// Drops every queued callback without running it, as a torn-down host
    /// would.
    pub fn tear_down(&self) {
        self.queue.borrow_mut().clear();
    }
}

impl core::fmt::Debug for ManualFrames {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ManualFrames")
            .field("pending", &self.pending())
            .field("rate", &self.rate)
            .field("now", &self.now.get())
            .field("frame_index", &self.frame_index.get())
            .finish_non_exhaustive()
    }
}

impl Default for ManualFrames {
    fn default() -> Self {
        Self::new(RefreshRate::HZ_60)
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self, callback: FrameCallback) {
        self.requested.set(self.requested.get() + 1);
        self.queue.borrow_mut().push_back(callback);
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec;

    use super::*;

    #[test]
    fn fire_runs_in_request_order() {
        let frames = ManualFrames::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let order = Rc::clone(&order);
            frames.request_frame(Box::new(move |_| order.borrow_mut().push(i)));
        }
        assert_eq!(frames.fire(), 3);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn callbacks_requested_during_fire_wait_for_next_boundary() {
        let frames = Rc::new(ManualFrames::default());
        let inner = Rc::clone(&frames);
        frames.request_frame(Box::new(move |_| {
            inner.request_frame(Box::new(|_| {}));
        }));
        assert_eq!(frames.fire(), 1);
        assert_eq!(frames.pending(), 1);
        assert_eq!(frames.fire(), 1);
    }

    #[test]
    fn clock_advances_per_boundary() {
        let frames = ManualFrames::new(RefreshRate::HZ_120);
        let seen = Rc::new(Cell::new(None));
        let s = Rc::clone(&seen);
        frames.fire();
        frames.request_frame(Box::new(move |tick| s.set(Some(tick))));
        frames.fire();
        assert_eq!(seen.get(), Some(FrameTick::new(HostTime(16_666), 1)));
        assert_eq!(frames.frames_fired(), 2);
    }

    #[test]
    fn tear_down_never_runs_callbacks() {
        let frames = ManualFrames::default();
        let ran = Rc::new(Cell::new(false));
        let r = Rc::clone(&ran);
        frames.request_frame(Box::new(move |_| r.set(true)));
        frames.tear_down();
        assert_eq!(frames.fire(), 0);
        assert!(!ran.get());
    }
}
