// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame opportunities delivered by the host.
//!
//! A [`FrameTick`] is what a [`FrameScheduler`](crate::backend::FrameScheduler)
//! hands to a frame callback. On the web it is built from the
//! `requestAnimationFrame` timestamp; in tests it comes from a manual clock.
//!
//! The browser offers pacing only: there is no predicted present time, so a
//! tick carries just the callback time and a counter.

use crate::time::HostTime;

/// A frame opportunity delivered by the host just before it repaints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTick {
    /// Host time of the frame callback.
    pub now: HostTime,
    /// Monotonically increasing frame counter, per scheduler.
    pub frame_index: u64,
}

impl FrameTick {
    /// Creates a tick for `frame_index` at `now`.
    #[inline]
    #[must_use]
    pub const fn new(now: HostTime, frame_index: u64) -> Self {
        Self { now, frame_index }
    }

    /// Returns the time elapsed since `earlier`, saturating at zero.
    #[inline]
    #[must_use]
    pub const fn since(&self, earlier: &Self) -> crate::time::Duration {
        self.now.saturating_duration_since(earlier.now)
    }
}
