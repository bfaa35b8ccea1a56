// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coalescer behavior against the manual frame scheduler.

use std::cell::RefCell;
use std::rc::Rc;

use limelight_core::coalesce::{Coalescer, CoalescerId, UpdateRequest};
use limelight_harness::{ManualFrames, RefreshRate};

type Calls = Rc<RefCell<Vec<f64>>>;

fn push_into(calls: &Calls) -> impl FnOnce(f64) + 'static {
    let calls = Rc::clone(calls);
    move |y| calls.borrow_mut().push(y)
}

fn setup() -> (Rc<ManualFrames>, Coalescer<f64, Rc<ManualFrames>>, Calls) {
    let frames = Rc::new(ManualFrames::new(RefreshRate::HZ_60));
    let c = Coalescer::new(CoalescerId::PARALLAX, Rc::clone(&frames), 0.0);
    (frames, c, Rc::new(RefCell::new(Vec::new())))
}

#[test]
fn any_burst_size_computes_once() {
    for k in [1_u32, 2, 10, 500] {
        let (frames, c, calls) = setup();
        for i in 0..k {
            c.record_position(f64::from(i));
        }
        for _ in 0..k {
            c.request_update(push_into(&calls));
        }
        assert_eq!(frames.requested(), 1, "burst of {k}");
        frames.fire();
        assert_eq!(calls.borrow().len(), 1, "burst of {k}");
    }
}

#[test]
fn last_write_wins() {
    let (frames, c, calls) = setup();
    c.record_position(1.0);
    c.request_update(push_into(&calls));
    c.record_position(2.0);
    frames.fire();
    assert_eq!(*calls.borrow(), [2.0]);
}

#[test]
fn rearms_after_each_frame() {
    let (frames, c, calls) = setup();
    c.record_position(1.0);
    c.request_update(push_into(&calls));
    frames.fire();
    c.record_position(2.0);
    assert_eq!(c.request_update(push_into(&calls)), UpdateRequest::Scheduled);
    frames.fire();
    assert_eq!(*calls.borrow(), [1.0, 2.0]);
}

#[test]
fn independent_instances_share_a_scheduler_without_interference() {
    let frames = Rc::new(ManualFrames::default());
    let a = Coalescer::new(CoalescerId(1), Rc::clone(&frames), 0.0);
    let b = Coalescer::new(CoalescerId(2), Rc::clone(&frames), 0.0);
    let a_calls: Calls = Rc::default();
    let b_calls: Calls = Rc::default();

    a.record_position(10.0);
    a.request_update(push_into(&a_calls));
    b.record_position(20.0);
    assert_eq!(b.request_update(push_into(&b_calls)), UpdateRequest::Scheduled);
    a.request_update(push_into(&a_calls));

    assert_eq!(frames.fire(), 2);
    assert_eq!(*a_calls.borrow(), [10.0]);
    assert_eq!(*b_calls.borrow(), [20.0]);
}

#[test]
fn scenario_from_two_bursts() {
    let (frames, c, calls) = setup();

    c.record_position(100.0);
    c.request_update(push_into(&calls));
    c.record_position(150.0);
    c.request_update(push_into(&calls));
    frames.fire();
    assert_eq!(*calls.borrow(), [150.0]);

    c.record_position(200.0);
    c.request_update(push_into(&calls));
    frames.fire();
    assert_eq!(*calls.borrow(), [150.0, 200.0]);
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn torn_down_host_stalls_without_failing() {
    let (frames, c, calls) = setup();
    c.record_position(5.0);
    c.request_update(push_into(&calls));
    frames.tear_down();
    frames.fire_n(3);

    assert!(calls.borrow().is_empty());
    assert!(c.is_pending(), "stalled instance stays pending");
    assert_eq!(
        c.request_update(push_into(&calls)),
        UpdateRequest::Coalesced,
        "and keeps folding requests"
    );
}

#[test]
fn stall_in_one_instance_does_not_block_another() {
    let stalled_host = Rc::new(ManualFrames::default());
    let live_host = Rc::new(ManualFrames::default());
    let stalled = Coalescer::new(CoalescerId(1), Rc::clone(&stalled_host), 0.0);
    let live = Coalescer::new(CoalescerId(2), Rc::clone(&live_host), 0.0);
    let calls: Calls = Rc::default();

    stalled.request_update(|_| {});
    stalled_host.tear_down();

    for y in [1.0, 2.0, 3.0] {
        live.record_position(y);
        live.request_update(push_into(&calls));
        live_host.fire();
    }
    assert_eq!(*calls.borrow(), [1.0, 2.0, 3.0]);
}

#[test]
fn recompute_rate_tracks_frames_not_events() {
    // 1 kHz input against a 60 Hz display over one simulated second.
    let (frames, c, calls) = setup();
    let mut scroll = 0.0;
    for _frame in 0..60 {
        for _event in 0..16 {
            scroll += 3.0;
            c.record_position(scroll);
            c.request_update(push_into(&calls));
        }
        frames.fire();
    }
    let calls = calls.borrow();
    assert_eq!(calls.len(), 60);
    assert_eq!(calls.last().copied(), Some(scroll));
}
