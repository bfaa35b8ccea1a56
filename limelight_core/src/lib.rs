// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-coalesced scroll effects and page-enhancement logic.
//!
//! `limelight_core` holds everything about the page enhancements that does not
//! touch a real host: the frame-coalescing primitive, the scheduler contract
//! backends implement, configuration, capability grading, and the pure math
//! behind each visual feature. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! Scroll and pointer events arrive far faster than the display refreshes.
//! Features that recompute styles from a position route those events through
//! a [`Coalescer`](coalesce::Coalescer):
//!
//! ```text
//!   scroll event ──► record_position() ──► request_update()
//!                                              │ (idle only)
//!                                              ▼
//!                           FrameScheduler::request_frame()
//!                                              │
//!                                              ▼
//!   FrameTick ──► compute_fn(latest position) ──► idle
//! ```
//!
//! **[`coalesce`]**: At most one pending frame per instance, last write wins.
//!
//! **[`backend`]**: The [`FrameScheduler`](backend::FrameScheduler) trait a
//! host implements (e.g. with `requestAnimationFrame`).
//!
//! **[`timing`]** and **[`time`]**: Frame ticks and microsecond host time.
//!
//! **[`capability`]**: Tri-state host capability grading, evaluated once.
//!
//! **[`config`]**: The explicit [`Config`](config::Config) value handed to
//! every feature installer.
//!
//! **[`feature`]**: Per-feature logic (parallax offsets, navbar state,
//! ripple geometry, and so on) plus the [`InitReport`](feature::InitReport)
//! that records how each feature fared at start-up.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types with
//! a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod capability;
pub mod coalesce;
pub mod config;
pub mod feature;
pub mod time;
pub mod timing;
pub mod trace;
