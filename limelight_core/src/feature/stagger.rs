// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stagger setup: numbered delay classes on grouped items.
//!
//! The stylesheet defines `.delay-1`, `.delay-2`, … as increasing transition
//! delays. Tagging the items of a section in order makes them reveal one after
//! another.

use alloc::format;
use alloc::string::String;
use core::num::NonZeroUsize;

use super::reveal;

/// One group of items that share a reveal class and a delay sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StaggerGroup {
    /// Selector for the items, in document order.
    pub selector: &'static str,
    /// Reveal class added to every item.
    pub class: &'static str,
    /// Restart the delay sequence every `cycle` items; `None` never restarts.
    pub cycle: Option<NonZeroUsize>,
}

const FOUR: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(n) => n,
    None => unreachable!(),
};

/// The page's stagger groups.
pub const GROUPS: [StaggerGroup; 3] = [
    // Feature tiles.
    StaggerGroup {
        selector: ".features10 .item",
        class: reveal::STAGGER_CLASS,
        cycle: None,
    },
    // Team pictures.
    StaggerGroup {
        selector: ".features03 .item",
        class: reveal::ANIMATE_CLASS,
        cycle: None,
    },
    // Feedback cards, one row of four at a time.
    StaggerGroup {
        selector: ".people04 .item",
        class: reveal::STAGGER_CLASS,
        cycle: Some(FOUR),
    },
];

impl StaggerGroup {
    /// Delay step (1-based) for the item at `index`.
    #[must_use]
    pub const fn step(&self, index: usize) -> usize {
        let i = match self.cycle {
            Some(cycle) => index % cycle.get(),
            None => index,
        };
        i + 1
    }

    /// Delay class for the item at `index`, e.g. `delay-3`.
    #[must_use]
    pub fn delay_class(&self, index: usize) -> String {
        format!("delay-{}", self.step(index))
    }
}
