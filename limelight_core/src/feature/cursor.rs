// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Custom cursor trail.
//!
//! A ring follows the pointer with exponential easing: each frame it covers a
//! fixed fraction of the remaining distance. It stays hidden until the first
//! pointer move and grows while hovering interactive elements.

use alloc::format;
use alloc::string::String;

use kurbo::Point;

use crate::config::Config;

/// Class of the cursor element.
pub const CURSOR_CLASS: &str = "custom-cursor";

/// Elements that enlarge the cursor on hover.
pub const INTERACTIVE_SELECTOR: &str = "a, button, .btn";

/// Ring color at rest.
pub const IDLE_BORDER: &str = "#6366f1";

/// Ring color over an interactive element.
pub const HOVER_BORDER: &str = "#8b5cf6";

/// Inline style for a freshly created cursor element.
#[must_use]
pub fn base_css(config: &Config) -> String {
    let size = config.cursor_size;
    format!(
        "position: fixed; width: {size}px; height: {size}px; \
         border: 2px solid {IDLE_BORDER}; border-radius: 50%; \
         pointer-events: none; z-index: 9999; \
         transition: transform 0.15s ease; display: none;"
    )
}

/// Whether a viewport of `width` CSS pixels gets the cursor trail.
#[inline]
#[must_use]
pub fn fits_viewport(width: f64, config: &Config) -> bool {
    width >= config.cursor_min_viewport_width
}

/// Hover state of the cursor ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorHover {
    /// Not over an interactive element.
    Idle,
    /// Over an interactive element.
    Active,
}

impl CursorHover {
    /// `transform` value for this state.
    #[must_use]
    pub const fn transform(self) -> &'static str {
        match self {
            Self::Idle => "scale(1)",
            Self::Active => "scale(1.5)",
        }
    }

    /// `border-color` value for this state.
    #[must_use]
    pub const fn border_color(self) -> &'static str {
        match self {
            Self::Idle => IDLE_BORDER,
            Self::Active => HOVER_BORDER,
        }
    }
}

/// Eased cursor position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorTrail {
    pointer: Point,
    cursor: Point,
    easing: f64,
    half_size: f64,
    visible: bool,
}

impl CursorTrail {
    /// Creates a hidden trail at the origin.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            pointer: Point::ORIGIN,
            cursor: Point::ORIGIN,
            easing: config.cursor_easing.clamp(0.0, 1.0),
            half_size: config.cursor_size / 2.0,
            visible: false,
        }
    }

    /// Records a pointer position. Returns `true` on the first move, when the
    /// cursor element should be shown.
    pub fn pointer_moved(&mut self, pointer: Point) -> bool {
        self.pointer = pointer;
        !core::mem::replace(&mut self.visible, true)
    }

    /// Advances one frame and returns the element's top-left corner.
    pub fn step(&mut self) -> Point {
        self.cursor = self.cursor.lerp(self.pointer, self.easing);
        self.top_left()
    }

    /// Top-left corner that centers the ring on the eased position.
    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.cursor.x - self.half_size, self.cursor.y - self.half_size)
    }

    /// Whether the pointer has moved at least once.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_move_reveals_once() {
        let mut t = CursorTrail::new(&Config::new());
        assert!(!t.is_visible());
        assert!(t.pointer_moved(Point::new(5.0, 5.0)));
        assert!(!t.pointer_moved(Point::new(6.0, 6.0)));
        assert!(t.is_visible());
    }

    #[test]
    fn step_covers_a_tenth_of_the_gap() {
        let mut t = CursorTrail::new(&Config::new());
        t.pointer_moved(Point::new(100.0, 200.0));
        let p = t.step();
        // Eased to (10, 20), then offset by half the 20px ring.
        assert!((p.x - 0.0).abs() < 1e-9, "{p:?}");
        assert!((p.y - 10.0).abs() < 1e-9, "{p:?}");
    }

    #[test]
    fn trail_converges_on_pointer() {
        let mut t = CursorTrail::new(&Config::new());
        t.pointer_moved(Point::new(300.0, 40.0));
        let mut p = Point::ORIGIN;
        for _ in 0..200 {
            p = t.step();
        }
        assert!((p.x - 290.0).abs() < 1e-3, "{p:?}");
        assert!((p.y - 30.0).abs() < 1e-3, "{p:?}");
    }

    #[test]
    fn viewport_gate_and_hover_styles() {
        let c = Config::new();
        assert!(!fits_viewport(767.0, &c));
        assert!(fits_viewport(768.0, &c));
        assert_eq!(CursorHover::Active.transform(), "scale(1.5)");
        assert_eq!(CursorHover::Idle.border_color(), IDLE_BORDER);
    }

    #[test]
    fn base_css_mentions_size_and_color() {
        let css = base_css(&Config::new());
        assert!(css.contains("width: 20px"), "{css}");
        assert!(css.contains(IDLE_BORDER), "{css}");
        assert!(css.contains("display: none"), "{css}");
    }
}
