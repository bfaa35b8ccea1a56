// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal-on-scroll.
//!
//! Elements tagged with [`ANIMATE_CLASS`] or [`STAGGER_CLASS`] start hidden in
//! CSS. The first time one comes near the viewport it gains [`VISIBLE_CLASS`]
//! and is no longer watched, so a reveal never plays twice.

use crate::config::Config;

/// Class for standalone reveal elements.
pub const ANIMATE_CLASS: &str = "scroll-animate";

/// Class for reveal elements that belong to a stagger group.
pub const STAGGER_CLASS: &str = "stagger-item";

/// Class that plays the reveal.
pub const VISIBLE_CLASS: &str = "is-visible";

/// Selectors for every element that reveals.
pub const SELECTORS: [&str; 2] = [".scroll-animate", ".stagger-item"];

/// Visibility observer settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction that counts as intersecting.
    pub threshold: f64,
    /// Margin grown (or, when negative, shrunk) around the viewport.
    pub root_margin: &'static str,
}

impl ObserverOptions {
    /// Options for reveal observers.
    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self {
            threshold: config.intersection_threshold,
            root_margin: config.intersection_root_margin,
        }
    }
}

/// What to do with an observed element after an intersection callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealAction {
    /// Add [`VISIBLE_CLASS`] and stop observing.
    RevealAndRelease,
    /// Keep waiting.
    Wait,
}

impl RevealAction {
    /// Decides the action for one observer entry.
    #[inline]
    #[must_use]
    pub const fn for_entry(is_intersecting: bool) -> Self {
        if is_intersecting {
            Self::RevealAndRelease
        } else {
            Self::Wait
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_config() {
        let o = ObserverOptions::from_config(&Config::new());
        assert_eq!(o.threshold, 0.1);
        assert_eq!(o.root_margin, "0px 0px -100px 0px");
    }

    #[test]
    fn only_intersecting_entries_reveal() {
        assert_eq!(RevealAction::for_entry(true), RevealAction::RevealAndRelease);
        assert_eq!(RevealAction::for_entry(false), RevealAction::Wait);
    }

    #[test]
    fn selectors_match_classes() {
        assert_eq!(SELECTORS[0].trim_start_matches('.'), ANIMATE_CLASS);
        assert_eq!(SELECTORS[1].trim_start_matches('.'), STAGGER_CLASS);
    }
}
