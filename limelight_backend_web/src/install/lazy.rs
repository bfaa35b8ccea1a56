// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use limelight_core::feature::FeatureStatus;
use limelight_core::feature::lazy::{self, LazyStrategy};
use wasm_bindgen::JsCast as _;
use web_sys::HtmlImageElement;

use super::{Handles, Page};
use crate::dom::query_all_as;
use crate::error::InitError;
use crate::observer::Observer;

fn load(image: &HtmlImageElement) {
    let data_src = image.get_attribute(lazy::DATA_SRC_ATTRIBUTE);
    let current = image.src();
    let source = lazy::resolve_source(data_src.as_deref(), &current);
    if source != current {
        image.set_src(source);
    }
}

/// Native lazy loading swaps sources right away and lets the browser defer
/// the fetch; the fallback waits for each image to approach the viewport.
pub(super) fn install(page: &Page, handles: &mut Handles) -> Result<FeatureStatus, InitError> {
    let Some(strategy) = LazyStrategy::for_capability(page.capabilities.lazy_loading) else {
        return Ok(FeatureStatus::Unsupported);
    };
    let images = query_all_as::<HtmlImageElement>(&page.document, strategy.selector())?;
    if images.is_empty() {
        return Ok(FeatureStatus::NoTargets);
    }

    match strategy {
        LazyStrategy::Native => images.iter().for_each(load),
        LazyStrategy::Observer => {
            let observer = Observer::new(None, |entry, observer| {
                if !entry.is_intersecting() {
                    return;
                }
                let target = entry.target();
                if let Some(image) = target.dyn_ref::<HtmlImageElement>() {
                    load(image);
                    let _ = image.class_list().remove_1(lazy::LAZY_CLASS);
                }
                observer.unobserve(&target);
            })?;
            for image in &images {
                observer.observe(image);
            }
            handles.observe(observer);
        }
    }
    Ok(FeatureStatus::from_targets(images.len()))
}
