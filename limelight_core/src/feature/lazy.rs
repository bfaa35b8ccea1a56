// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred image sources.
//!
//! Images carry their real source in `data-src`. With native lazy loading the
//! browser defers the fetch itself, so sources are swapped in immediately.
//! Without it, an observer swaps each source when the image nears the
//! viewport.

use crate::capability::Capability;

/// Selector for natively lazy images.
pub const NATIVE_SELECTOR: &str = "img[loading=\"lazy\"]";

/// Selector for images waiting on the observer fallback.
pub const FALLBACK_SELECTOR: &str = "img.lazy";

/// Class removed once a fallback image has its source.
pub const LAZY_CLASS: &str = "lazy";

/// Attribute holding the deferred source.
pub const DATA_SRC_ATTRIBUTE: &str = "data-src";

/// How deferred sources are applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LazyStrategy {
    /// The browser defers loading; swap every source now.
    Native,
    /// Swap each source on first intersection.
    Observer,
}

impl LazyStrategy {
    /// Picks a strategy for the host's lazy-loading capability.
    #[must_use]
    pub const fn for_capability(capability: Capability) -> Option<Self> {
        match capability {
            Capability::Available => Some(Self::Native),
            Capability::Fallback => Some(Self::Observer),
            Capability::Unavailable => None,
        }
    }

    /// Selector for the images this strategy handles.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Native => NATIVE_SELECTOR,
            Self::Observer => FALLBACK_SELECTOR,
        }
    }
}

/// Returns the source an image should end up with: its `data-src` when set
/// and non-empty, otherwise its current `src`.
#[must_use]
pub fn resolve_source<'a>(data_src: Option<&'a str>, current: &'a str) -> &'a str {
    data_src.filter(|s| !s.is_empty()).unwrap_or(current)
}
