// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navbar shadow and hide-on-scroll.
//!
//! Past a small offset the navbar gains a shadow. Past a larger offset,
//! scrolling down slides it out of view and any upward scroll brings it back.

use crate::config::Config;

/// Selector for the navbar.
pub const SELECTOR: &str = ".navbar";

/// Class added while the page is scrolled past the shadow threshold.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Transform that slides the navbar out of view.
pub const HIDDEN_TRANSFORM: &str = "translateY(-100%)";

/// Transform for the resting navbar.
pub const SHOWN_TRANSFORM: &str = "translateY(0)";

/// `box-shadow` value when not scrolled.
pub const NO_SHADOW: &str = "none";

/// The navbar's visual state for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavbarStyle {
    /// Past the shadow threshold.
    pub scrolled: bool,
    /// Slid out of view.
    pub hidden: bool,
}

impl NavbarStyle {
    /// The `box-shadow` value for this state.
    #[must_use]
    pub const fn box_shadow(&self, config: &Config) -> &'static str {
        if self.scrolled {
            config.navbar_shadow
        } else {
            NO_SHADOW
        }
    }

    /// The `transform` value for this state.
    #[must_use]
    pub const fn transform(&self) -> &'static str {
        if self.hidden {
            HIDDEN_TRANSFORM
        } else {
            SHOWN_TRANSFORM
        }
    }
}

/// Tracks the previous scroll offset between navbar frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarState {
    last_scroll: f64,
    shadow_threshold: f64,
    hide_threshold: f64,
}

impl NavbarState {
    /// Creates a state at the top of the page.
    #[must_use]
    pub const fn new(config: &Config) -> Self {
        Self {
            last_scroll: 0.0,
            shadow_threshold: config.navbar_shadow_threshold,
            hide_threshold: config.navbar_hide_threshold,
        }
    }

    /// Computes the style for scroll offset `current` and remembers it for
    /// the next frame.
    pub fn update(&mut self, current: f64) -> NavbarStyle {
        let style = NavbarStyle {
            scrolled: current > self.shadow_threshold,
            hidden: current > self.last_scroll && current > self.hide_threshold,
        };
        self.last_scroll = current;
        style
    }

    /// The offset seen by the last [`update`](Self::update).
    #[must_use]
    pub const fn last_scroll(&self) -> f64 {
        self.last_scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> NavbarState {
        NavbarState::new(&Config::new())
    }

    #[test]
    fn shadow_past_threshold() {
        let mut s = state();
        assert!(!s.update(50.0).scrolled, "threshold itself is not past it");
        assert!(s.update(51.0).scrolled);
        assert!(!s.update(10.0).scrolled);
    }

    #[test]
    fn hides_only_when_scrolling_down_deep() {
        let mut s = state();
        assert!(!s.update(400.0).hidden, "down but above hide threshold");
        assert!(s.update(600.0).hidden);
        assert!(s.update(700.0).hidden);
        assert!(!s.update(650.0).hidden, "any upward scroll shows it");
        assert!(!s.update(650.0).hidden, "no movement shows it");
    }

    #[test]
    fn style_values() {
        let config = Config::new();
        let hidden = NavbarStyle {
            scrolled: true,
            hidden: true,
        };
        assert_eq!(hidden.transform(), HIDDEN_TRANSFORM);
        assert_eq!(hidden.box_shadow(&config), config.navbar_shadow);

        let top = NavbarStyle {
            scrolled: false,
            hidden: false,
        };
        assert_eq!(top.transform(), SHOWN_TRANSFORM);
        assert_eq!(top.box_shadow(&config), NO_SHADOW);
    }

    #[test]
    fn remembers_last_scroll() {
        let mut s = state();
        s.update(123.0);
        assert_eq!(s.last_scroll(), 123.0);
    }
}
