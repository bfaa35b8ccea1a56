// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page features and their start-up outcomes.
//!
//! Each submodule holds the host-independent half of one feature: selectors,
//! class names, and the arithmetic that turns a scroll offset or a click
//! position into style values. Backends do the DOM work.
//!
//! Features are independent. An installer that finds no target elements
//! reports [`FeatureStatus::NoTargets`], which is a normal outcome and never
//! stops other features from installing.

use alloc::vec::Vec;
use core::fmt;

use crate::capability::{Capability, HostCapabilities};
use crate::config::Config;

pub mod anchor;
pub mod carousel;
pub mod cursor;
pub mod lazy;
pub mod motion;
pub mod navbar;
pub mod parallax;
pub mod reveal;
pub mod ripple;
pub mod stagger;

/// The independent page features.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    /// Reduced-motion fallback.
    ReducedMotion,
    /// Numbered delay classes on grouped items.
    Stagger,
    /// Reveal-on-scroll classes.
    Reveal,
    /// Scroll-linked translation.
    Parallax,
    /// Click ripple on buttons.
    Ripple,
    /// Smooth in-page anchor scrolling.
    Anchor,
    /// Navbar shadow and hide-on-scroll.
    Navbar,
    /// Carousel autoplay pause on hover.
    Carousel,
    /// Deferred image sources.
    LazyLoad,
    /// Custom eased cursor.
    CursorTrail,
}

impl Feature {
    /// All features, in installation order.
    ///
    /// Reduced motion runs first because it changes the configuration the
    /// others see. Stagger runs before reveal so the classes it adds are
    /// observed.
    pub const ALL: [Self; 10] = [
        Self::ReducedMotion,
        Self::Stagger,
        Self::Reveal,
        Self::Parallax,
        Self::Ripple,
        Self::Anchor,
        Self::Navbar,
        Self::Carousel,
        Self::LazyLoad,
        Self::CursorTrail,
    ];

    /// Returns a short, stable name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReducedMotion => "reduced-motion",
            Self::Stagger => "stagger",
            Self::Reveal => "reveal",
            Self::Parallax => "parallax",
            Self::Ripple => "ripple",
            Self::Anchor => "anchor",
            Self::Navbar => "navbar",
            Self::Carousel => "carousel",
            Self::LazyLoad => "lazy-load",
            Self::CursorTrail => "cursor-trail",
        }
    }

    /// Returns `false` if the configuration switches this feature off.
    #[must_use]
    pub const fn is_enabled(self, config: &Config) -> bool {
        match self {
            Self::Parallax => config.enable_parallax,
            Self::Anchor => config.enable_smooth_scroll,
            Self::CursorTrail => config.enable_cursor_trail,
            _ => true,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened when a feature was installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureStatus {
    /// Listeners are attached to `targets` elements (or to the window, which
    /// counts as one).
    Installed {
        /// Number of elements the feature acts on.
        targets: usize,
    },
    /// The page has nothing for this feature to act on.
    NoTargets,
    /// The configuration switched the feature off.
    Disabled,
    /// A required host capability is missing.
    Unsupported,
}

impl FeatureStatus {
    /// [`Installed`](Self::Installed) for a non-zero count, otherwise
    /// [`NoTargets`](Self::NoTargets).
    #[inline]
    #[must_use]
    pub const fn from_targets(targets: usize) -> Self {
        if targets == 0 {
            Self::NoTargets
        } else {
            Self::Installed { targets }
        }
    }

    /// Decides whether `feature` should be skipped before touching the page.
    ///
    /// Returns `Some` with the skip reason, or `None` if installation should
    /// go ahead.
    #[must_use]
    pub const fn precheck(
        feature: Feature,
        config: &Config,
        capabilities: &HostCapabilities,
    ) -> Option<Self> {
        if !feature.is_enabled(config) {
            return Some(Self::Disabled);
        }
        match capabilities.requirement(feature) {
            Capability::Unavailable => Some(Self::Unsupported),
            Capability::Available | Capability::Fallback => None,
        }
    }

    /// Returns `true` for [`Installed`](Self::Installed).
    #[inline]
    #[must_use]
    pub const fn is_installed(self) -> bool {
        matches!(self, Self::Installed { .. })
    }
}

impl fmt::Display for FeatureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Installed { targets } => write!(f, "installed ({targets})"),
            Self::NoTargets => f.write_str("no targets"),
            Self::Disabled => f.write_str("disabled"),
            Self::Unsupported => f.write_str("unsupported"),
        }
    }
}

/// Per-feature outcomes of one page initialization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitReport {
    entries: Vec<(Feature, FeatureStatus)>,
}

impl InitReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome for `feature`, replacing any earlier entry.
    pub fn record(&mut self, feature: Feature, status: FeatureStatus) {
        match self.entries.iter_mut().find(|(f, _)| *f == feature) {
            Some(entry) => entry.1 = status,
            None => self.entries.push((feature, status)),
        }
    }

    /// Returns the recorded outcome for `feature`.
    #[must_use]
    pub fn status(&self, feature: Feature) -> Option<FeatureStatus> {
        self.entries
            .iter()
            .find(|(f, _)| *f == feature)
            .map(|&(_, s)| s)
    }

    /// Iterates outcomes in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, FeatureStatus)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of features that installed listeners.
    #[must_use]
    pub fn installed_count(&self) -> usize {
        self.entries.iter().filter(|(_, s)| s.is_installed()).count()
    }
}

impl fmt::Display for InitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} features installed",
            self.installed_count(),
            self.entries.len()
        )?;
        for (feature, status) in &self.entries {
            write!(f, "; {feature}: {status}")?;
        }
        Ok(())
    }
}
