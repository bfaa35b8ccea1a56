// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame coalescing for high-frequency position updates.
//!
//! Scroll and pointer events can fire many times between two repaints. A
//! [`Coalescer`] decouples that input rate from the rate of expensive style
//! recomputation: however many events arrive before the next frame boundary,
//! the compute function runs once, with the last recorded position.
//!
//! # State machine
//!
//! ```text
//!            request_update()            frame fires:
//!   ┌──────┐ ───────────────► ┌───────────────┐ compute_fn(pos)
//!   │ idle │                  │ frame-pending │ ──────────────┐
//!   └──────┘ ◄─────────────── └───────────────┘               │
//!      ▲        (after compute_fn)      │ request_update()    │
//!      │                                └──► no-op            │
//!      └──────────────────────────────────────────────────────┘
//! ```
//!
//! [`record_position`](Coalescer::record_position) never changes state.
//!
//! Each producer owns its own instance. Parallax and the navbar both follow
//! the scroll offset, but they coalesce independently so a stalled update in
//! one cannot suppress the other.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use crate::backend::FrameScheduler;
use crate::trace::{self, FrameFiredEvent, SharedSink, UpdateRequestedEvent};

/// Identifies a coalescer in trace output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CoalescerId(pub u32);

impl CoalescerId {
    /// The coalescer driving parallax transforms.
    pub const PARALLAX: Self = Self(0);
    /// The coalescer driving navbar visibility and shadow.
    pub const NAVBAR: Self = Self(1);
}

/// Outcome of [`Coalescer::request_update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpdateRequest {
    /// The coalescer was idle; one frame callback is now pending.
    Scheduled,
    /// A frame was already pending; it will pick up the latest position.
    Coalesced,
}

/// Bounds recomputation of position-derived state to once per frame.
///
/// `T` is the position type (a scroll offset, a pointer coordinate pair).
/// `S` is the host's frame scheduler.
///
/// Cloning a `Coalescer` yields another handle to the **same** instance, so
/// an event listener and the scheduled frame callback can share it. Create a
/// separate instance with [`Coalescer::new`] for each independent producer.
///
/// # Example
///
/// ```rust,ignore
/// let parallax = Coalescer::new(CoalescerId::PARALLAX, scheduler, 0.0_f64);
/// on_scroll(move |y| {
///     parallax.record_position(y);
///     parallax.request_update(|y| apply_parallax(y));
/// });
/// ```
pub struct Coalescer<T, S> {
    inner: Rc<Inner<T, S>>,
}

struct Inner<T, S> {
    id: CoalescerId,
    scheduler: S,
    /// Latest recorded position, read once when the frame fires.
    position: Cell<T>,
    /// `true` while a frame callback is outstanding.
    pending: Cell<bool>,
    /// Requests seen since the pending frame was scheduled.
    requests: Cell<u32>,
    sink: Option<SharedSink>,
}

impl<T, S> Clone for Coalescer<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Copy + fmt::Debug, S> fmt::Debug for Coalescer<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coalescer")
            .field("id", &self.inner.id)
            .field("position", &self.inner.position.get())
            .field("pending", &self.inner.pending.get())
            .finish_non_exhaustive()
    }
}

impl<T, S> Coalescer<T, S>
where
    T: Copy + 'static,
    S: FrameScheduler + 'static,
{
    /// Creates an idle coalescer with `initial` as the recorded position.
    #[must_use]
    pub fn new(id: CoalescerId, scheduler: S, initial: T) -> Self {
        Self::build(id, scheduler, initial, None)
    }

    /// Creates an idle coalescer that reports to `sink`.
    #[must_use]
    pub fn with_sink(id: CoalescerId, scheduler: S, initial: T, sink: SharedSink) -> Self {
        Self::build(id, scheduler, initial, Some(sink))
    }

    fn build(id: CoalescerId, scheduler: S, initial: T, sink: Option<SharedSink>) -> Self {
        Self {
            inner: Rc::new(Inner {
                id,
                scheduler,
                position: Cell::new(initial),
                pending: Cell::new(false),
                requests: Cell::new(0),
                sink,
            }),
        }
    }

    /// Stores the latest observed position. Later writes supersede earlier
    /// ones; nothing is queued.
    #[inline]
    pub fn record_position(&self, value: T) {
        self.inner.position.set(value);
    }

    /// Schedules `compute` for the next frame unless a frame is already
    /// pending.
    ///
    /// When the frame fires, `compute` receives the position recorded most
    /// recently *at that moment*, not the one current when this was called.
    /// The pending flag is cleared after `compute` returns, so a request made
    /// from inside `compute` is folded into the frame that is finishing.
    pub fn request_update<F>(&self, compute: F) -> UpdateRequest
    where
        F: FnOnce(T) + 'static,
    {
        let inner = &self.inner;
        inner.requests.set(inner.requests.get().saturating_add(1));

        let outcome = if inner.pending.get() {
            UpdateRequest::Coalesced
        } else {
            inner.pending.set(true);
            let shared = Rc::clone(inner);
            inner.scheduler.request_frame(Box::new(move |tick| {
                compute(shared.position.get());
                let requests = shared.requests.replace(0);
                shared.pending.set(false);
                trace::with_shared(shared.sink.as_ref(), |t| {
                    t.frame_fired(&FrameFiredEvent {
                        coalescer: shared.id,
                        frame_index: tick.frame_index,
                        now: tick.now,
                        requests,
                    });
                });
            }));
            UpdateRequest::Scheduled
        };

        trace::with_shared(inner.sink.as_ref(), |t| {
            t.update_requested(&UpdateRequestedEvent {
                coalescer: inner.id,
                outcome,
            });
        });
        outcome
    }

    /// Returns `true` while a frame callback is outstanding.
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.pending.get()
    }

    /// Returns the most recently recorded position.
    #[inline]
    #[must_use]
    pub fn position(&self) -> T {
        self.inner.position.get()
    }

    /// Returns this coalescer's trace identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> CoalescerId {
        self.inner.id
    }
}
