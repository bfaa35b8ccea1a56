// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` frame sources.
//!
//! Two shapes are provided:
//!
//! - [`RafScheduler`] implements [`FrameScheduler`] with one-shot callbacks,
//!   which is what a [`Coalescer`] needs.
//! - [`RafLoop`] re-registers itself every frame until stopped, for effects
//!   that animate continuously (the cursor trail).
//!
//! Each callback receives a [`DOMHighResTimeStamp`][mdn] (milliseconds from
//! `performance.now()`), which is converted to microsecond [`HostTime`]
//! ticks.
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/DOMHighResTimeStamp
//! [`Coalescer`]: limelight_core::coalesce::Coalescer

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use limelight_core::backend::{FrameCallback, FrameScheduler};
use limelight_core::time::HostTime;
use limelight_core::timing::FrameTick;

// Direct global bindings instead of `web_sys::Window` methods: avoids
// fetching (and unwrapping) the Window object on every frame.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

// ---------------------------------------------------------------------------
// RafScheduler
// ---------------------------------------------------------------------------

/// One-shot `requestAnimationFrame` scheduler.
///
/// Cloning yields a handle to the same frame counter. Callbacks that the
/// browser runs in the same rendering frame (same timestamp) see the same
/// `frame_index`.
#[derive(Clone, Default)]
pub struct RafScheduler {
    clock: Rc<FrameClock>,
}

#[derive(Default)]
struct FrameClock {
    /// Index of the frame whose timestamp is `last_stamp`.
    frame_index: Cell<u64>,
    /// Timestamp of the most recent callback, `None` before the first.
    last_stamp: Cell<Option<u64>>,
}

impl FrameClock {
    fn tick(&self, timestamp_ms: f64) -> FrameTick {
        let now = HostTime::from_millis_f64(timestamp_ms);
        let index = match self.last_stamp.get() {
            None => 0,
            Some(last) if last == now.ticks() => self.frame_index.get(),
            Some(_) => self.frame_index.get() + 1,
        };
        self.last_stamp.set(Some(now.ticks()));
        self.frame_index.set(index);
        FrameTick::new(now, index)
    }
}

impl RafScheduler {
    /// Creates a scheduler with its frame counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        let clock = Rc::clone(&self.clock);
        let js = Closure::once_into_js(move |timestamp_ms: f64| {
            callback(clock.tick(timestamp_ms));
        });
        // The id is not kept: a one-shot request is never cancelled, and a
        // page that is torn down simply never runs it.
        let _ = request_animation_frame(&js);
    }
}

impl core::fmt::Debug for RafScheduler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafScheduler")
            .field("frame_index", &self.clock.frame_index.get())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// RafLoop
// ---------------------------------------------------------------------------

/// Per-frame driver for effects that move on every frame, not only on scroll.
///
/// The cursor trail eases its dot towards the pointer from here. The loop
/// shares the frame numbering of [`RafScheduler`], so a trace lines its ticks
/// up with the coalescers' frames.
///
/// Nothing runs until [`start`](Self::start). Dropping the loop cancels the
/// pending frame and releases the JS closure.
pub struct RafLoop {
    inner: Rc<LoopState>,
}

type FrameFn = Closure<dyn FnMut(f64)>;

struct LoopState {
    /// Registered with the browser on every frame. Set by `start`.
    frame_fn: RefCell<Option<FrameFn>>,
    on_frame: RefCell<Box<dyn FnMut(FrameTick)>>,
    clock: FrameClock,
    active: Cell<bool>,
    /// Handle of the outstanding request, for `cancelAnimationFrame`.
    pending: Cell<i32>,
}

impl LoopState {
    fn schedule(&self) {
        if let Some(frame_fn) = self.frame_fn.borrow().as_ref() {
            self.pending
                .set(request_animation_frame(frame_fn.as_ref().unchecked_ref()));
        }
    }
}

impl RafLoop {
    /// Wraps `on_frame` in a stopped loop.
    pub fn new(on_frame: impl FnMut(FrameTick) + 'static) -> Self {
        Self {
            inner: Rc::new(LoopState {
                frame_fn: RefCell::new(None),
                on_frame: RefCell::new(Box::new(on_frame)),
                clock: FrameClock::default(),
                active: Cell::new(false),
                pending: Cell::new(0),
            }),
        }
    }

    /// Requests the first frame. Does nothing on a loop that is already
    /// active.
    pub fn start(&self) {
        if self.inner.active.replace(true) {
            return;
        }

        // Weak, or the registered closure would own the state that owns it.
        let state = Rc::downgrade(&self.inner);
        let frame_fn = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            let Some(state) = state.upgrade() else {
                return;
            };
            if !state.active.get() {
                return;
            }
            let tick = state.clock.tick(timestamp_ms);
            (state.on_frame.borrow_mut())(tick);
            // `on_frame` may have stopped the loop.
            if state.active.get() {
                state.schedule();
            }
        }) as Box<dyn FnMut(f64)>);

        *self.inner.frame_fn.borrow_mut() = Some(frame_fn);
        self.inner.schedule();
    }

    /// Cancels the outstanding frame. [`start`](Self::start) resumes.
    pub fn stop(&self) {
        if self.inner.active.replace(false) {
            cancel_animation_frame(self.inner.pending.get());
        }
    }

    /// Whether a frame is currently requested.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.active.get()
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        self.inner.frame_fn.borrow_mut().take();
    }
}

impl core::fmt::Debug for RafLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafLoop")
            .field("active", &self.inner.active.get())
            .field("frame_index", &self.inner.clock.frame_index.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_timestamp_shares_a_frame_index() {
        let clock = FrameClock::default();
        assert_eq!(clock.tick(16.0), FrameTick::new(HostTime(16_000), 0));
        assert_eq!(clock.tick(16.0).frame_index, 0);
        assert_eq!(clock.tick(32.5), FrameTick::new(HostTime(32_500), 1));
        assert_eq!(clock.tick(49.0).frame_index, 2);
    }
}
