// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo: limelight enhancements on a static landing page.
//!
//! Installs the panic hook and console logger, waits for the document to
//! finish parsing, then installs every feature with the default
//! configuration.
//!
//! Build with: `wasm-pack build --target web demos/landing_page`
//!
//! Then serve `demos/landing_page/` and open `index.html` in a browser.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

use limelight_backend_web::{ConsoleLogger, EventListener, InitError};
use limelight_core::config::Config;
use log::LevelFilter;
use wasm_bindgen::prelude::*;
use web_sys::Window;

fn enhance(window: &Window) {
    match limelight_backend_web::init(window, Config::new()) {
        // The page lives as long as the enhancements do.
        Ok(enhancements) => core::mem::forget(enhancements),
        Err(err) => log::error!("limelight: {err}"),
    }
}

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second module on the page may already own the logger.
    let _ = ConsoleLogger::install(LevelFilter::Info);

    let window = web_sys::window().ok_or(InitError::NoWindow)?;
    let document = window.document().ok_or(InitError::NoDocument)?;

    if document.ready_state() != "loading" {
        enhance(&window);
        return Ok(());
    }

    let listener = EventListener::new(&document, "DOMContentLoaded", move |_| enhance(&window))?;
    // Fires once; the page never unloads the module.
    core::mem::forget(listener);
    Ok(())
}
