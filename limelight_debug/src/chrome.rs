// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use limelight_core::coalesce::UpdateRequest;

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// Each coalescer gets its own track (`tid`). Frame callbacks carry their
/// host timestamp; update requests and feature start-up carry no clock of
/// their own and are pinned to the most recent frame time seen (zero before
/// the first frame).
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    let mut last_ts: u64 = 0;

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::UpdateRequested(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": match e.outcome {
                        UpdateRequest::Scheduled => "UpdateScheduled",
                        UpdateRequest::Coalesced => "UpdateCoalesced",
                    },
                    "cat": "Coalescer",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": e.coalescer.0,
                    "s": "t",
                }));
            }
            RecordedEvent::FrameFired(e) => {
                last_ts = e.now.ticks();
                events.push(json!({
                    "ph": "i",
                    "name": "FrameFired",
                    "cat": "Coalescer",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": e.coalescer.0,
                    "s": "t",
                    "args": {
                        "frame_index": e.frame_index,
                        "requests": e.requests,
                    }
                }));
            }
            RecordedEvent::FeatureInit(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": e.feature.as_str(),
                    "cat": "Init",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "p",
                    "args": {
                        "status": e.status.to_string(),
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::recorder::RecorderSink;
    use limelight_core::coalesce::{Coalescer, CoalescerId};
    use limelight_core::feature::{Feature, FeatureStatus};
    use limelight_core::trace::{FeatureInitEvent, TraceSink};
    use limelight_harness::ManualFrames;

    #[test]
    fn export_produces_valid_json() {
        let frames = Rc::new(ManualFrames::default());
        let rec = Rc::new(RefCell::new(RecorderSink::new()));
        rec.borrow_mut().on_feature_init(&FeatureInitEvent {
            feature: Feature::Parallax,
            status: FeatureStatus::Installed { targets: 2 },
        });
        let c = Coalescer::with_sink(CoalescerId::PARALLAX, Rc::clone(&frames), 0.0_f64, rec.clone());
        c.record_position(10.0);
        c.request_update(|_| {});
        c.request_update(|_| {});
        frames.fire();

        let mut out = Vec::new();
        export(rec.borrow().as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 4);

        assert_eq!(parsed[0]["cat"], "Init");
        assert_eq!(parsed[0]["name"], Feature::Parallax.as_str());
        assert_eq!(parsed[0]["args"]["status"], "installed (2)");

        assert_eq!(parsed[1]["name"], "UpdateScheduled");
        assert_eq!(parsed[2]["name"], "UpdateCoalesced");

        assert_eq!(parsed[3]["name"], "FrameFired");
        assert_eq!(parsed[3]["ts"], 16_667);
        assert_eq!(parsed[3]["args"]["requests"], 2);
        assert_eq!(parsed[3]["tid"], CoalescerId::PARALLAX.0);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
