// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`], and [`CoalescerStats::collect`]
//! summarises how much work the coalescers saved.

use std::collections::BTreeMap;

use limelight_core::coalesce::{CoalescerId, UpdateRequest};
use limelight_core::feature::{Feature, FeatureStatus};
use limelight_core::time::HostTime;
use limelight_core::trace::{FeatureInitEvent, FrameFiredEvent, TraceSink, UpdateRequestedEvent};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_UPDATE_REQUESTED: u8 = 1;
const TAG_FRAME_FIRED: u8 = 2;
const TAG_FEATURE_INIT: u8 = 3;

const STATUS_INSTALLED: u8 = 0;
const STATUS_NO_TARGETS: u8 = 1;
const STATUS_DISABLED: u8 = 2;
const STATUS_UNSUPPORTED: u8 = 3;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_feature(&mut self, f: Feature) {
        let idx = Feature::ALL.iter().position(|&x| x == f).unwrap_or(0);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Feature::ALL has ten entries"
        )]
        self.write_u8(idx as u8);
    }

    fn write_status(&mut self, s: FeatureStatus) {
        let (tag, targets) = match s {
            FeatureStatus::Installed { targets } => (STATUS_INSTALLED, targets),
            FeatureStatus::NoTargets => (STATUS_NO_TARGETS, 0),
            FeatureStatus::Disabled => (STATUS_DISABLED, 0),
            FeatureStatus::Unsupported => (STATUS_UNSUPPORTED, 0),
        };
        self.write_u8(tag);
        self.write_u64(u64::try_from(targets).unwrap_or(u64::MAX));
    }
}

impl TraceSink for RecorderSink {
    fn on_update_requested(&mut self, e: &UpdateRequestedEvent) {
        self.write_u8(TAG_UPDATE_REQUESTED);
        self.write_u32(e.coalescer.0);
        self.write_u8(match e.outcome {
            UpdateRequest::Scheduled => 0,
            UpdateRequest::Coalesced => 1,
        });
    }

    fn on_frame_fired(&mut self, e: &FrameFiredEvent) {
        self.write_u8(TAG_FRAME_FIRED);
        self.write_u32(e.coalescer.0);
        self.write_u64(e.frame_index);
        self.write_u64(e.now.ticks());
        self.write_u32(e.requests);
    }

    fn on_feature_init(&mut self, e: &FeatureInitEvent) {
        self.write_u8(TAG_FEATURE_INIT);
        self.write_feature(e.feature);
        self.write_status(e.status);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// An [`UpdateRequestedEvent`].
    UpdateRequested(UpdateRequestedEvent),
    /// A [`FrameFiredEvent`].
    FrameFired(FrameFiredEvent),
    /// A [`FeatureInitEvent`].
    FeatureInit(FeatureInitEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Decoding stops at the first unknown tag or truncated record.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        if self.remaining() < 4 {
            return None;
        }
        let v = u32::from_le_bytes(self.data[self.pos..self.pos + 4].try_into().ok()?);
        self.pos += 4;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = u64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_status(&mut self) -> Option<FeatureStatus> {
        let tag = self.read_u8()?;
        let targets = usize::try_from(self.read_u64()?).unwrap_or(usize::MAX);
        Some(match tag {
            STATUS_INSTALLED => FeatureStatus::Installed { targets },
            STATUS_NO_TARGETS => FeatureStatus::NoTargets,
            STATUS_DISABLED => FeatureStatus::Disabled,
            _ => FeatureStatus::Unsupported,
        })
    }

    fn decode_update_requested(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::UpdateRequested(UpdateRequestedEvent {
            coalescer: CoalescerId(self.read_u32()?),
            outcome: match self.read_u8()? {
                0 => UpdateRequest::Scheduled,
                _ => UpdateRequest::Coalesced,
            },
        }))
    }

    fn decode_frame_fired(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::FrameFired(FrameFiredEvent {
            coalescer: CoalescerId(self.read_u32()?),
            frame_index: self.read_u64()?,
            now: HostTime(self.read_u64()?),
            requests: self.read_u32()?,
        }))
    }

    fn decode_feature_init(&mut self) -> Option<RecordedEvent> {
        let feature = *Feature::ALL.get(usize::from(self.read_u8()?))?;
        Some(RecordedEvent::FeatureInit(FeatureInitEvent {
            feature,
            status: self.read_status()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_UPDATE_REQUESTED => self.decode_update_requested(),
            TAG_FRAME_FIRED => self.decode_frame_fired(),
            TAG_FEATURE_INIT => self.decode_feature_init(),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// How much recomputation one coalescer avoided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoalescerStats {
    /// Calls to `request_update`.
    pub requests: u64,
    /// Requests folded into an already pending frame.
    pub coalesced: u64,
    /// Frame callbacks that ran.
    pub frames: u64,
}

impl CoalescerStats {
    /// Aggregates a recording per coalescer.
    #[must_use]
    pub fn collect(bytes: &[u8]) -> BTreeMap<CoalescerId, Self> {
        let mut out: BTreeMap<CoalescerId, Self> = BTreeMap::new();
        for event in decode(bytes) {
            match event {
                RecordedEvent::UpdateRequested(e) => {
                    let s = out.entry(e.coalescer).or_default();
                    s.requests += 1;
                    if e.outcome == UpdateRequest::Coalesced {
                        s.coalesced += 1;
                    }
                }
                RecordedEvent::FrameFired(e) => {
                    out.entry(e.coalescer).or_default().frames += 1;
                }
                RecordedEvent::FeatureInit(_) => {}
            }
        }
        out
    }

    /// Average requests served per frame callback, or `0.0` before the first
    /// frame.
    #[must_use]
    pub fn requests_per_frame(&self) -> f64 {
        if self.frames == 0 {
            return 0.0;
        }
        self.requests as f64 / self.frames as f64
    }
}
