// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth in-page anchor scrolling.

/// Selector for in-page links.
pub const LINK_SELECTOR: &str = "a[href^=\"#\"]";

/// Returns the selector to look the link's target up with, or `None` when the
/// click should fall through to default navigation.
///
/// A bare `#` (the conventional "no target" link) and anything that is not a
/// fragment are skipped.
#[must_use]
pub fn target_selector(href: Option<&str>) -> Option<&str> {
    href.filter(|h| h.len() > 1 && h.starts_with('#'))
}

/// Scroll offset that puts a target at `offset_top` just below a fixed navbar
/// of height `anchor_offset`.
#[inline]
#[must_use]
pub fn scroll_top(offset_top: f64, anchor_offset: f64) -> f64 {
    offset_top - anchor_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_skipped() {
        assert_eq!(target_selector(Some("#")), None);
        assert_eq!(target_selector(None), None);
        assert_eq!(target_selector(Some("/about")), None);
    }

    #[test]
    fn fragment_is_its_own_selector() {
        assert_eq!(target_selector(Some("#pricing")), Some("#pricing"));
    }

    #[test]
    fn scroll_top_leaves_room_for_navbar() {
        assert_eq!(scroll_top(1200.0, 80.0), 1120.0);
        assert_eq!(scroll_top(30.0, 80.0), -50.0);
    }
}
