// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for host integrations.
//!
//! Limelight splits host-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Frame scheduler**: Implements [`FrameScheduler`] on top of the host's
//!   "run once before the next repaint" facility (`requestAnimationFrame` on
//!   the web).
//!
//! - **Capability detection**: Grades each optional host facility into a
//!   [`HostCapabilities`](crate::capability::HostCapabilities) value once, at
//!   start-up.
//!
//! - **Feature installers**: Wire each page feature to the host's event
//!   sources and report a [`FeatureStatus`](crate::feature::FeatureStatus).
//!
//! # Crate boundaries
//!
//! `limelight_core` owns the coalescing state machine, configuration, and
//! all per-feature math. Backend crates depend on `limelight_core` and
//! provide host glue. Tests substitute a manual scheduler (see the
//! `limelight_harness` crate) for the host.

use alloc::boxed::Box;
use alloc::rc::Rc;

use crate::timing::FrameTick;

/// A one-shot callback run at the next frame boundary.
pub type FrameCallback = Box<dyn FnOnce(FrameTick)>;

/// Schedules callbacks to run once, just before the host's next repaint.
///
/// Implementations must uphold three properties that
/// [`Coalescer`](crate::coalesce::Coalescer) relies on:
///
/// - a requested callback eventually runs, unless the host is torn down;
/// - a requested callback runs at most once;
/// - callbacks requested before the same frame boundary run in request order.
///
/// Implementations must not run the callback synchronously from inside
/// `request_frame`.
///
/// # Frame callback pseudocode
///
/// ```rust,ignore
/// scheduler.request_frame(Box::new(move |tick| {
///     let y = coalesced_position.get();
///     element.set_transform(parallax_offset(y));
/// }));
/// ```
pub trait FrameScheduler {
    /// Requests that `callback` run once at the next frame boundary.
    fn request_frame(&self, callback: FrameCallback);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Rc<S> {
    #[inline]
    fn request_frame(&self, callback: FrameCallback) {
        (**self).request_frame(callback);
    }
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &S {
    #[inline]
    fn request_frame(&self, callback: FrameCallback) {
        (**self).request_frame(callback);
    }
}
