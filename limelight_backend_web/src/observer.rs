// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned `IntersectionObserver`.

use alloc::boxed::Box;

use js_sys::Array;
use limelight_core::feature::reveal::ObserverOptions;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::InitError;

type EntriesClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` together with its callback.
///
/// Dropping the handle disconnects the observer.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: EntriesClosure,
}

impl Observer {
    /// Creates an observer that calls `on_entry` once per reported entry.
    ///
    /// `options` of `None` uses the browser defaults (viewport root, no
    /// margin, threshold 0).
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Js`] if the constructor throws (for example on a
    /// malformed root margin).
    pub fn new(
        options: Option<ObserverOptions>,
        mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Result<Self, InitError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let function = callback.as_ref().unchecked_ref();
        let observer = match options {
            Some(options) => {
                let init = IntersectionObserverInit::new();
                init.set_threshold(&JsValue::from_f64(options.threshold));
                init.set_root_margin(options.root_margin);
                IntersectionObserver::new_with_options(function, &init)?
            }
            None => IntersectionObserver::new(function)?,
        };

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Starts watching `element`.
    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl core::fmt::Debug for Observer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Observer").finish_non_exhaustive()
    }
}
