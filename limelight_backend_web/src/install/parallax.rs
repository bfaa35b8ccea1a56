// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use alloc::vec::Vec;

use limelight_core::coalesce::CoalescerId;
use limelight_core::config::Config;
use limelight_core::feature::FeatureStatus;
use limelight_core::feature::parallax;
use web_sys::HtmlElement;

use super::{Handles, Page};
use crate::dom::query_all_as;
use crate::error::InitError;
use crate::listener::EventListener;

struct Layer {
    element: HtmlElement,
    speed: f64,
}

fn apply(layers: &[Layer], scroll_y: f64) {
    for layer in layers {
        let css = parallax::transform_css(parallax::offset(scroll_y, layer.speed));
        let _ = layer.element.style().set_property("transform", &css);
    }
}

/// Moves `[data-parallax]` layers against the scroll direction, at most once
/// per frame. Speeds are read once, here.
pub(super) fn install(
    page: &Page,
    config: &Config,
    handles: &mut Handles,
) -> Result<FeatureStatus, InitError> {
    let layers: Vec<Layer> = query_all_as::<HtmlElement>(&page.document, parallax::SELECTOR)?
        .into_iter()
        .map(|element| {
            let speed = parallax::parse_speed(
                element.get_attribute(parallax::SPEED_ATTRIBUTE).as_deref(),
                config.default_parallax_speed,
            );
            Layer { element, speed }
        })
        .collect();
    if layers.is_empty() {
        return Ok(FeatureStatus::NoTargets);
    }
    let count = layers.len();
    let layers = Rc::new(layers);

    let coalescer = page.scroll_coalescer(CoalescerId::PARALLAX);
    let window = page.window.clone();
    handles.listen(EventListener::passive(&page.window, "scroll", move |_| {
        coalescer.record_position(window.scroll_y().unwrap_or(0.0));
        let layers = Rc::clone(&layers);
        coalescer.request_update(move |y| apply(&layers, y));
    })?);

    Ok(FeatureStatus::from_targets(count))
}
