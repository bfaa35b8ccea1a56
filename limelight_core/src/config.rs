// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page enhancement configuration.
//!
//! A [`Config`] value is built once and handed to every feature installer.
//! There is no ambient mutable configuration: the reduced-motion check
//! produces a new value with [`Config::with_reduced_motion`] rather than
//! flipping a shared flag.

use crate::time::Duration;

/// Configuration for all page features.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Fraction of a revealed element that must be visible to trigger it
    /// (0.0–1.0).
    pub intersection_threshold: f64,
    /// Root margin for reveal and lazy-load observers, in CSS margin syntax.
    pub intersection_root_margin: &'static str,
    /// Whether `[data-parallax]` elements follow the scroll offset.
    pub enable_parallax: bool,
    /// Whether in-page anchor links scroll smoothly.
    pub enable_smooth_scroll: bool,
    /// Whether the custom cursor trail is installed.
    pub enable_cursor_trail: bool,
    /// Parallax speed for elements whose `data-parallax` is missing or not a
    /// number.
    pub default_parallax_speed: f64,
    /// Height reserved for the fixed navbar when scrolling to an anchor, in
    /// CSS pixels.
    pub anchor_offset: f64,
    /// Scroll offset past which the navbar gains its shadow.
    pub navbar_shadow_threshold: f64,
    /// Scroll offset past which scrolling down hides the navbar.
    pub navbar_hide_threshold: f64,
    /// `box-shadow` applied to the navbar once scrolled.
    pub navbar_shadow: &'static str,
    /// How long a ripple stays in the DOM.
    pub ripple_lifetime: Duration,
    /// `data-auto-play-interval` restored when the pointer leaves the
    /// carousel.
    pub carousel_resume_interval: &'static str,
    /// Fraction of the remaining distance the cursor covers each frame.
    pub cursor_easing: f64,
    /// Cursor diameter in CSS pixels.
    pub cursor_size: f64,
    /// Narrowest viewport, in CSS pixels, that gets the cursor trail.
    pub cursor_min_viewport_width: f64,
    /// Animation speed written to the speed custom properties when the user
    /// prefers reduced motion.
    pub reduced_motion_speed: &'static str,
}

impl Config {
    /// The stock configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            intersection_threshold: 0.1,
            intersection_root_margin: "0px 0px -100px 0px",
            enable_parallax: true,
            enable_smooth_scroll: true,
            enable_cursor_trail: false,
            default_parallax_speed: 0.5,
            anchor_offset: 80.0,
            navbar_shadow_threshold: 50.0,
            navbar_hide_threshold: 500.0,
            navbar_shadow: "0 2px 10px rgba(0,0,0,0.1)",
            ripple_lifetime: Duration::from_millis(600),
            carousel_resume_interval: "3",
            cursor_easing: 0.1,
            cursor_size: 20.0,
            cursor_min_viewport_width: 768.0,
            reduced_motion_speed: "0.01s",
        }
    }

    /// Returns this configuration adjusted for users who prefer reduced
    /// motion: parallax is turned off.
    #[must_use]
    pub const fn with_reduced_motion(self) -> Self {
        Self {
            enable_parallax: false,
            ..self
        }
    }

    /// Returns this configuration with the cursor trail turned on.
    #[must_use]
    pub const fn with_cursor_trail(self) -> Self {
        Self {
            enable_cursor_trail: true,
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
