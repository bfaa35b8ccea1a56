// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One installer per [`Feature`].
//!
//! Every installer reads its targets from the page, attaches whatever
//! listeners, observers or loops it needs to [`Handles`], and reports a
//! [`FeatureStatus`]. Installers never decide on skipping for configuration
//! or capability reasons; [`FeatureStatus::precheck`] does that before they
//! run.

use alloc::rc::Rc;
use alloc::vec::Vec;

use limelight_core::capability::HostCapabilities;
use limelight_core::coalesce::{Coalescer, CoalescerId};
use limelight_core::config::Config;
use limelight_core::feature::{Feature, FeatureStatus};
use limelight_core::trace::SharedSink;
use web_sys::{Document, Element, Window};

use crate::error::InitError;
use crate::listener::EventListener;
use crate::observer::Observer;
use crate::raf::{RafLoop, RafScheduler};

mod anchor;
mod carousel;
mod cursor;
mod lazy;
mod motion;
mod navbar;
mod parallax;
mod reveal;
mod ripple;
mod stagger;

/// Browser objects shared by every installer.
pub(crate) struct Page {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) capabilities: HostCapabilities,
    pub(crate) scheduler: RafScheduler,
    pub(crate) sink: Option<SharedSink>,
}

impl Page {
    /// A fresh scroll coalescer on this page's scheduler.
    pub(crate) fn scroll_coalescer(&self, id: CoalescerId) -> Coalescer<f64, RafScheduler> {
        let scheduler = self.scheduler.clone();
        match &self.sink {
            Some(sink) => Coalescer::with_sink(id, scheduler, 0.0, Rc::clone(sink)),
            None => Coalescer::new(id, scheduler, 0.0),
        }
    }
}

/// Everything an installed feature keeps alive.
#[derive(Debug, Default)]
pub(crate) struct Handles {
    pub(crate) listeners: Vec<EventListener>,
    pub(crate) observers: Vec<Observer>,
    pub(crate) loops: Vec<RafLoop>,
    /// Elements an installer added to the page.
    pub(crate) created: Vec<Element>,
}

impl Handles {
    pub(crate) fn listen(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    pub(crate) fn observe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub(crate) fn animate(&mut self, raf: RafLoop) {
        self.loops.push(raf);
    }

    pub(crate) fn adopt(&mut self, element: Element) {
        self.created.push(element);
    }
}

impl Drop for Handles {
    fn drop(&mut self) {
        for element in self.created.drain(..) {
            element.remove();
        }
    }
}

/// Runs the installer for `feature`.
pub(crate) fn install(
    feature: Feature,
    page: &Page,
    config: &Config,
    handles: &mut Handles,
) -> Result<FeatureStatus, InitError> {
    match feature {
        Feature::ReducedMotion => motion::install(page, config),
        Feature::Stagger => stagger::install(page),
        Feature::Reveal => reveal::install(page, config, handles),
        Feature::Parallax => parallax::install(page, config, handles),
        Feature::Ripple => ripple::install(page, config, handles),
        Feature::Anchor => anchor::install(page, config, handles),
        Feature::Navbar => navbar::install(page, config, handles),
        Feature::Carousel => carousel::install(page, config, handles),
        Feature::LazyLoad => lazy::install(page, handles),
        Feature::CursorTrail => cursor::install(page, config, handles),
    }
}
