// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reduced-motion fallback.

use crate::config::Config;

/// Media query matched by users who ask for less motion.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Custom properties the stylesheet uses for animation durations.
pub const SPEED_PROPERTIES: [&str; 3] = [
    "--animation-speed-fast",
    "--animation-speed-normal",
    "--animation-speed-slow",
];

/// Root-element custom property overrides for reduced motion.
pub fn overrides(config: &Config) -> impl Iterator<Item = (&'static str, &'static str)> {
    let speed = config.reduced_motion_speed;
    SPEED_PROPERTIES.into_iter().map(move |p| (p, speed))
}
