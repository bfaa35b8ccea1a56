// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use limelight_core::config::Config;
use limelight_core::feature::FeatureStatus;
use limelight_core::feature::anchor;
use wasm_bindgen::JsCast as _;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::{Handles, Page};
use crate::dom::query_all;
use crate::error::InitError;
use crate::listener::EventListener;

pub(super) fn install(
    page: &Page,
    config: &Config,
    handles: &mut Handles,
) -> Result<FeatureStatus, InitError> {
    let links = query_all(&page.document, anchor::LINK_SELECTOR)?;
    for link in &links {
        let window = page.window.clone();
        let document = page.document.clone();
        let href_source: Element = link.clone();
        let anchor_offset = config.anchor_offset;
        handles.listen(EventListener::new(link, "click", move |event| {
            let href = href_source.get_attribute("href");
            let Some(selector) = anchor::target_selector(href.as_deref()) else {
                return;
            };
            // A fragment that is not a valid selector, or names nothing,
            // falls through to the browser's own navigation.
            let Ok(Some(target)) = document.query_selector(selector) else {
                return;
            };
            event.prevent_default();
            let offset_top = target
                .dyn_ref::<HtmlElement>()
                .map_or(0.0, |el| f64::from(el.offset_top()));
            let options = ScrollToOptions::new();
            options.set_top(anchor::scroll_top(offset_top, anchor_offset));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?);
    }
    Ok(FeatureStatus::from_targets(links.len()))
}
