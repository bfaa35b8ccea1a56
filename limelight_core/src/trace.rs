// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for coalesced updates and feature start-up.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! coalescers and feature installers call. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! Coalescers outlive any single borrow, so they hold a [`SharedSink`] and
//! build a short-lived `Tracer` around it per event.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::coalesce::{CoalescerId, UpdateRequest};
use crate::feature::{Feature, FeatureStatus};
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted each time a coalescer receives an update request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpdateRequestedEvent {
    /// Which coalescer received the request.
    pub coalescer: CoalescerId,
    /// Whether a frame was scheduled or the request folded into a pending one.
    pub outcome: UpdateRequest,
}

/// Emitted after a coalescer's frame callback has run its compute function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameFiredEvent {
    /// Which coalescer fired.
    pub coalescer: CoalescerId,
    /// Frame counter from the originating tick.
    pub frame_index: u64,
    /// Host time of the frame callback.
    pub now: HostTime,
    /// Requests folded into this frame, including the one that scheduled it.
    pub requests: u32,
}

/// Emitted once per feature when the page is initialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureInitEvent {
    /// The feature that was set up (or skipped).
    pub feature: Feature,
    /// What happened.
    pub status: FeatureStatus,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from coalescers and feature installers.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a coalescer receives `request_update`.
    fn on_update_requested(&mut self, e: &UpdateRequestedEvent) {
        _ = e;
    }

    /// Called after a coalescer's frame callback ran.
    fn on_frame_fired(&mut self, e: &FrameFiredEvent) {
        _ = e;
    }

    /// Called once per feature during page initialization.
    fn on_feature_init(&mut self, e: &FeatureInitEvent) {
        _ = e;
    }
}

/// A trace sink shared between a coalescer and its frame callbacks.
pub type SharedSink = Rc<RefCell<dyn TraceSink>>;

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`UpdateRequestedEvent`].
    #[inline]
    pub fn update_requested(&mut self, e: &UpdateRequestedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_update_requested(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameFiredEvent`].
    #[inline]
    pub fn frame_fired(&mut self, e: &FrameFiredEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame_fired(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FeatureInitEvent`].
    #[inline]
    pub fn feature_init(&mut self, e: &FeatureInitEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_feature_init(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

/// Runs `f` with a [`Tracer`] around `sink`, if there is one.
///
/// A sink that is already borrowed (an event emitted from inside another
/// sink callback) is skipped rather than panicking.
pub fn with_shared(sink: Option<&SharedSink>, f: impl FnOnce(&mut Tracer<'_>)) {
    let Some(sink) = sink else {
        return;
    };
    if let Ok(mut guard) = sink.try_borrow_mut() {
        let mut tracer = Tracer::new(&mut *guard);
        f(&mut tracer);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> UpdateRequestedEvent {
        UpdateRequestedEvent {
            coalescer: CoalescerId::PARALLAX,
            outcome: UpdateRequest::Scheduled,
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_update_requested(&sample_request());
        sink.on_frame_fired(&FrameFiredEvent {
            coalescer: CoalescerId::NAVBAR,
            frame_index: 3,
            now: HostTime(48_000),
            requests: 7,
        });
        sink.on_feature_init(&FeatureInitEvent {
            feature: Feature::Navbar,
            status: FeatureStatus::NoTargets,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.update_requested(&sample_request());
    }

    #[test]
    fn with_shared_skips_missing_sink() {
        let mut called = false;
        with_shared(None, |_| called = true);
        assert!(!called, "no sink means no tracer");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            outcomes: Vec<UpdateRequest>,
        }
        impl TraceSink for RecordingSink {
            fn on_update_requested(&mut self, e: &UpdateRequestedEvent) {
                self.outcomes.push(e.outcome);
            }
        }

        let mut sink = RecordingSink {
            outcomes: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.update_requested(&sample_request());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.outcomes, &[UpdateRequest::Scheduled]);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn with_shared_skips_reentrant_borrow() {
        use alloc::vec::Vec;

        struct CountingSink {
            seen: Vec<CoalescerId>,
        }
        impl TraceSink for CountingSink {
            fn on_update_requested(&mut self, e: &UpdateRequestedEvent) {
                self.seen.push(e.coalescer);
            }
        }

        let concrete = Rc::new(RefCell::new(CountingSink { seen: Vec::new() }));
        let shared: SharedSink = concrete.clone();
        let guard = concrete.borrow_mut();
        with_shared(Some(&shared), |t| t.update_requested(&sample_request()));
        drop(guard);
        with_shared(Some(&shared), |t| t.update_requested(&sample_request()));
        assert_eq!(concrete.borrow().seen.len(), 1, "borrowed sink is skipped");
    }
}
