// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::RefCell;

use limelight_core::coalesce::CoalescerId;
use limelight_core::config::Config;
use limelight_core::feature::FeatureStatus;
use limelight_core::feature::navbar::{self, NavbarState, NavbarStyle};
use wasm_bindgen::JsCast as _;
use web_sys::HtmlElement;

use super::{Handles, Page};
use crate::error::InitError;
use crate::listener::EventListener;

fn apply(element: &HtmlElement, style: NavbarStyle, config: &Config) {
    let _ = element
        .class_list()
        .toggle_with_force(navbar::SCROLLED_CLASS, style.scrolled);
    let css = element.style();
    let _ = css.set_property("box-shadow", style.box_shadow(config));
    let _ = css.set_property("transform", style.transform());
}

/// Shadow past the first fold, hide while scrolling down further.
pub(super) fn install(
    page: &Page,
    config: &Config,
    handles: &mut Handles,
) -> Result<FeatureStatus, InitError> {
    let Some(element) = page
        .document
        .query_selector(navbar::SELECTOR)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(FeatureStatus::NoTargets);
    };

    let element = Rc::new(element);
    let state = Rc::new(RefCell::new(NavbarState::new(config)));
    let config = *config;
    let coalescer = page.scroll_coalescer(CoalescerId::NAVBAR);
    let window = page.window.clone();
    handles.listen(EventListener::passive(&page.window, "scroll", move |_| {
        coalescer.record_position(window.scroll_y().unwrap_or(0.0));
        let element = Rc::clone(&element);
        let state = Rc::clone(&state);
        coalescer.request_update(move |y| {
            let style = state.borrow_mut().update(y);
            apply(&element, style, &config);
        });
    })?);

    Ok(FeatureStatus::from_targets(1))
}
