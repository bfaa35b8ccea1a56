// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned event listeners.

use alloc::boxed::Box;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast as _;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::InitError;

/// An event listener that stays attached for as long as the handle lives.
///
/// Dropping the handle removes the listener and frees the JS closure.
pub struct EventListener {
    target: EventTarget,
    kind: &'static str,
    passive: bool,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Attaches `handler` to `target` for events of type `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Js`] if `addEventListener` throws.
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, InitError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            passive: false,
            closure,
        })
    }

    /// Like [`new`](Self::new), but registered with `{ passive: true }`.
    ///
    /// The browser never waits on a passive handler before scrolling, and
    /// `preventDefault` inside it has no effect. Scroll handlers use this.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Js`] if `addEventListener` throws.
    pub fn passive(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, InitError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            kind,
            passive: true,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        // Both constructors register in the bubbling phase, so removal
        // matches on `capture: false`.
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.kind,
            self.closure.as_ref().unchecked_ref(),
            false,
        );
    }
}

impl core::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventListener")
            .field("kind", &self.kind)
            .field("passive", &self.passive)
            .finish_non_exhaustive()
    }
}
