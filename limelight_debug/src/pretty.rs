// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use limelight_core::coalesce::UpdateRequest;
use limelight_core::trace::{FeatureInitEvent, FrameFiredEvent, TraceSink, UpdateRequestedEvent};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
///
/// Write errors are dropped; tracing never interrupts the page.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the destination.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_update_requested(&mut self, e: &UpdateRequestedEvent) {
        let outcome = match e.outcome {
            UpdateRequest::Scheduled => "scheduled",
            UpdateRequest::Coalesced => "coalesced",
        };
        let _ = writeln!(self.writer, "[request] coalescer={} {outcome}", e.coalescer.0);
    }

    fn on_frame_fired(&mut self, e: &FrameFiredEvent) {
        let _ = writeln!(
            self.writer,
            "[frame] coalescer={} frame={} now={}µs requests={}",
            e.coalescer.0,
            e.frame_index,
            e.now.ticks(),
            e.requests,
        );
    }

    fn on_feature_init(&mut self, e: &FeatureInitEvent) {
        let _ = writeln!(self.writer, "[init] {} {}", e.feature, e.status);
    }
}
