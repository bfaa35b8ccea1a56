// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for limelight.
//!
//! This crate wires the host-independent logic in `limelight_core` to the
//! DOM:
//!
//! - [`RafScheduler`]: one-shot `requestAnimationFrame` scheduler driving the
//!   scroll coalescers
//! - [`RafLoop`]: continuous `requestAnimationFrame` loop (cursor trail)
//! - [`detect`]: host capability probing
//! - [`ConsoleLogger`]: `log` backend writing to the browser console
//! - [`init`]: installs every feature and returns the [`Enhancements`] that
//!   keep them alive
//!
//! ```rust,ignore
//! let window = web_sys::window().ok_or(InitError::NoWindow)?;
//! let enhancements = limelight_backend_web::init(&window, Config::new())?;
//! log::info!("{}", enhancements.report());
//! ```

#![no_std]

extern crate alloc;

mod capability;
mod dom;
mod error;
mod install;
mod listener;
mod logger;
mod observer;
mod raf;

pub use capability::detect;
pub use error::InitError;
pub use listener::EventListener;
pub use logger::ConsoleLogger;
pub use observer::Observer;
pub use raf::{RafLoop, RafScheduler};

use limelight_core::capability::Capability;
use limelight_core::config::Config;
use limelight_core::feature::{Feature, FeatureStatus, InitReport};
use limelight_core::trace::{self, FeatureInitEvent, SharedSink};
use web_sys::Window;

use install::{Handles, Page};

/// The installed page enhancements.
///
/// Owns every listener, observer and animation loop the features attached.
/// Dropping it detaches all of them and removes any element an installer
/// added to the page.
#[derive(Debug)]
pub struct Enhancements {
    report: InitReport,
    config: Config,
    _handles: Handles,
}

impl Enhancements {
    /// How each feature fared.
    #[must_use]
    pub fn report(&self) -> &InitReport {
        &self.report
    }

    /// The configuration the features were installed with, after any
    /// reduced-motion adjustment.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Installs every feature on the page behind `window`.
///
/// Features are installed in [`Feature::ALL`] order. A feature whose installer
/// fails is reported as [`FeatureStatus::Unsupported`] and the rest carry on.
///
/// # Errors
///
/// Returns [`InitError::NoDocument`] if the window has no document.
pub fn init(window: &Window, config: Config) -> Result<Enhancements, InitError> {
    init_with_sink(window, config, None)
}

/// Like [`init`], reporting coalescer and start-up events to `sink`.
///
/// Events only reach the sink when `limelight_core` is built with its `trace`
/// feature.
///
/// # Errors
///
/// Returns [`InitError::NoDocument`] if the window has no document.
pub fn init_traced(
    window: &Window,
    config: Config,
    sink: SharedSink,
) -> Result<Enhancements, InitError> {
    init_with_sink(window, config, Some(sink))
}

fn init_with_sink(
    window: &Window,
    mut config: Config,
    sink: Option<SharedSink>,
) -> Result<Enhancements, InitError> {
    let document = window.document().ok_or(InitError::NoDocument)?;
    let capabilities = detect(window);
    if capabilities.intersection_observer == Capability::Unavailable {
        log::warn!("IntersectionObserver unavailable; reveal animations are off");
    }
    if capabilities.lazy_loading == Capability::Fallback {
        log::debug!("native lazy loading unavailable; using an observer instead");
    }

    let page = Page {
        window: window.clone(),
        document,
        capabilities,
        scheduler: RafScheduler::new(),
        sink,
    };
    let mut handles = Handles::default();
    let mut report = InitReport::new();

    for feature in Feature::ALL {
        let status = match FeatureStatus::precheck(feature, &config, &capabilities) {
            Some(skipped) => skipped,
            None => install::install(feature, &page, &config, &mut handles).unwrap_or_else(|err| {
                log::warn!("{feature}: {err}");
                FeatureStatus::Unsupported
            }),
        };

        if feature == Feature::ReducedMotion && status.is_installed() {
            config = config.with_reduced_motion();
        }
        if !status.is_installed() {
            log::debug!("{feature}: {status}");
        }
        report.record(feature, status);
        trace::with_shared(page.sink.as_ref(), |t| {
            t.feature_init(&FeatureInitEvent { feature, status });
        });
    }

    log::info!("{report}");
    Ok(Enhancements {
        report,
        config,
        _handles: handles,
    })
}
