// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel autoplay pause on hover.
//!
//! The carousel script reads its autoplay interval from a data attribute;
//! writing `"0"` pauses it.

use crate::config::Config;

/// Selector for the carousel root.
pub const SELECTOR: &str = ".embla";

/// Attribute read by the carousel script.
pub const INTERVAL_ATTRIBUTE: &str = "data-auto-play-interval";

/// Interval value that stops autoplay.
pub const PAUSED_INTERVAL: &str = "0";

/// Pointer hover transitions on the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hover {
    /// The pointer moved onto the carousel.
    Enter,
    /// The pointer left the carousel.
    Leave,
}

impl Hover {
    /// DOM event name for this transition.
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Enter => "mouseenter",
            Self::Leave => "mouseleave",
        }
    }

    /// Interval to write for this transition.
    #[must_use]
    pub const fn interval(self, config: &Config) -> &'static str {
        match self {
            Self::Enter => PAUSED_INTERVAL,
            Self::Leave => config.carousel_resume_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let c = Config::new();
        assert_eq!(Hover::Enter.interval(&c), "0");
        assert_eq!(Hover::Leave.interval(&c), "3");
        assert_eq!(Hover::Enter.event_name(), "mouseenter");
    }
}
