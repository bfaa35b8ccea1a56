// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click ripple geometry.
//!
//! A ripple is a square `span.ripple` as large as the button's longer side,
//! centered on the click point, in the button's local coordinates. The CSS
//! animation does the rest.

use kurbo::{Point, Rect, Size};

/// Selector for buttons that ripple.
pub const BUTTON_SELECTOR: &str = ".btn";

/// Class of the ripple element.
pub const RIPPLE_CLASS: &str = "ripple";

/// Selector matching an existing ripple inside a button.
pub const RIPPLE_SELECTOR: &str = ".ripple";

/// Tag of the ripple element.
pub const RIPPLE_TAG: &str = "span";

/// Returns the ripple's rectangle relative to the button's top-left corner.
///
/// `button` is the button's client rectangle and `click` the pointer position
/// in the same (viewport) coordinates.
#[must_use]
pub fn ripple_rect(button: Rect, click: Point) -> Rect {
    let size = button.width().max(button.height());
    let half = size / 2.0;
    let origin = Point::new(click.x - button.x0 - half, click.y - button.y0 - half);
    Rect::from_origin_size(origin, Size::new(size, size))
}
