// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-linked translation for `[data-parallax]` elements.
//!
//! Each tagged element moves up by `scroll × speed` pixels, where `speed`
//! comes from its `data-parallax` attribute.

use alloc::format;
use alloc::string::String;

use kurbo::Vec2;

/// Selector for parallax elements.
pub const SELECTOR: &str = "[data-parallax]";

/// Attribute holding an element's speed factor.
pub const SPEED_ATTRIBUTE: &str = "data-parallax";

/// Parses a `data-parallax` value.
///
/// Missing, blank, and non-numeric values yield `default`. An explicit `"0"`
/// is honored and pins the element.
#[must_use]
pub fn parse_speed(raw: Option<&str>, default: f64) -> f64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Translation for an element moving at `speed` when the page is scrolled
/// `scroll_y` pixels down.
#[inline]
#[must_use]
pub fn offset(scroll_y: f64, speed: f64) -> Vec2 {
    // Adding zero folds -0.0 into 0.0 so the CSS never reads "-0px".
    Vec2::new(0.0, -(scroll_y * speed) + 0.0)
}

/// Formats an offset as a compositor-friendly CSS transform.
#[must_use]
pub fn transform_css(offset: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", offset.x, offset.y)
}
