// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability-graded host model.
//!
//! Optional host facilities (visibility observation, animation frames, native
//! image lazy loading, media queries) may be missing. Backends probe them once
//! at start-up and record the result here; installers consult the grade
//! instead of failing at call time. A missing capability disables only the
//! features that depend on it.

use crate::feature::Feature;

/// How well the host supports an optional facility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// The native facility is present.
    Available,
    /// The native facility is missing but a fallback is usable.
    Fallback,
    /// Neither the facility nor a fallback is usable.
    Unavailable,
}

impl Capability {
    /// Grades a facility from whether it, or a fallback for it, exists.
    #[inline]
    #[must_use]
    pub const fn grade(native: bool, fallback: bool) -> Self {
        match (native, fallback) {
            (true, _) => Self::Available,
            (false, true) => Self::Fallback,
            (false, false) => Self::Unavailable,
        }
    }

    /// Grades a facility that has no fallback.
    #[inline]
    #[must_use]
    pub const fn from_present(present: bool) -> Self {
        Self::grade(present, false)
    }

    /// Returns `true` unless the capability is [`Unavailable`](Self::Unavailable).
    #[inline]
    #[must_use]
    pub const fn is_usable(self) -> bool {
        !matches!(self, Self::Unavailable)
    }
}

/// The graded capabilities of one host, evaluated once at initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HostCapabilities {
    /// Visibility-proximity detection (`IntersectionObserver`).
    pub intersection_observer: Capability,
    /// "Run before next repaint" scheduling (`requestAnimationFrame`).
    pub animation_frame: Capability,
    /// Image lazy loading: native `loading` attribute, or an observer-driven
    /// fallback.
    pub lazy_loading: Capability,
    /// Media query evaluation (`matchMedia`).
    pub match_media: Capability,
}

impl HostCapabilities {
    /// A host that supports everything natively.
    pub const FULL: Self = Self {
        intersection_observer: Capability::Available,
        animation_frame: Capability::Available,
        lazy_loading: Capability::Available,
        match_media: Capability::Available,
    };

    /// A host that supports nothing optional.
    pub const NONE: Self = Self {
        intersection_observer: Capability::Unavailable,
        animation_frame: Capability::Unavailable,
        lazy_loading: Capability::Unavailable,
        match_media: Capability::Unavailable,
    };

    /// Builds the grades from raw presence probes.
    ///
    /// Lazy loading falls back to observer-driven swapping when the native
    /// attribute is unsupported but `IntersectionObserver` exists.
    #[must_use]
    pub const fn from_probes(
        intersection_observer: bool,
        animation_frame: bool,
        native_lazy_loading: bool,
        match_media: bool,
    ) -> Self {
        Self {
            intersection_observer: Capability::from_present(intersection_observer),
            animation_frame: Capability::from_present(animation_frame),
            lazy_loading: Capability::grade(native_lazy_loading, intersection_observer),
            match_media: Capability::from_present(match_media),
        }
    }

    /// Returns the capability `feature` depends on.
    ///
    /// Features with no optional dependency report
    /// [`Available`](Capability::Available).
    #[must_use]
    pub const fn requirement(&self, feature: Feature) -> Capability {
        match feature {
            Feature::Reveal => self.intersection_observer,
            Feature::Parallax | Feature::Navbar | Feature::CursorTrail => self.animation_frame,
            Feature::LazyLoad => self.lazy_loading,
            Feature::ReducedMotion => self.match_media,
            Feature::Stagger | Feature::Ripple | Feature::Anchor | Feature::Carousel => {
                Capability::Available
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_prefers_native() {
        assert_eq!(Capability::grade(true, true), Capability::Available);
        assert_eq!(Capability::grade(false, true), Capability::Fallback);
        assert_eq!(Capability::grade(false, false), Capability::Unavailable);
        assert!(Capability::Fallback.is_usable());
        assert!(!Capability::Unavailable.is_usable());
    }

    #[test]
    fn lazy_loading_falls_back_to_observer() {
        let caps = HostCapabilities::from_probes(true, true, false, true);
        assert_eq!(caps.lazy_loading, Capability::Fallback);

        let caps = HostCapabilities::from_probes(false, true, false, true);
        assert_eq!(caps.lazy_loading, Capability::Unavailable);
        assert_eq!(caps.intersection_observer, Capability::Unavailable);
    }

    #[test]
    fn missing_observer_only_gates_dependent_features() {
        let caps = HostCapabilities::from_probes(false, true, true, true);
        assert_eq!(caps.requirement(Feature::Reveal), Capability::Unavailable);
        assert_eq!(caps.requirement(Feature::LazyLoad), Capability::Available);
        assert_eq!(caps.requirement(Feature::Parallax), Capability::Available);
        assert_eq!(caps.requirement(Feature::Ripple), Capability::Available);
    }

    #[test]
    fn no_capabilities_still_allows_plain_listeners() {
        let caps = HostCapabilities::NONE;
        for feature in Feature::ALL {
            let usable = caps.requirement(feature).is_usable();
            let plain = matches!(
                feature,
                Feature::Stagger | Feature::Ripple | Feature::Anchor | Feature::Carousel
            );
            assert_eq!(usable, plain, "{feature:?}");
        }
    }
}
