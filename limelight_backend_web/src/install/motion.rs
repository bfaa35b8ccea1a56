// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use limelight_core::config::Config;
use limelight_core::feature::FeatureStatus;
use limelight_core::feature::motion;
use wasm_bindgen::JsCast as _;
use web_sys::HtmlElement;

use super::Page;
use crate::error::InitError;

/// Shortens the animation-speed custom properties when the user prefers
/// reduced motion. `NoTargets` means the preference is not set.
pub(super) fn install(page: &Page, config: &Config) -> Result<FeatureStatus, InitError> {
    let prefers_reduced = page
        .window
        .match_media(motion::REDUCED_MOTION_QUERY)?
        .is_some_and(|query| query.matches());
    if !prefers_reduced {
        return Ok(FeatureStatus::NoTargets);
    }

    let Some(root) = page
        .document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(FeatureStatus::NoTargets);
    };
    let style = root.style();
    for (property, value) in motion::overrides(config) {
        style.set_property(property, value)?;
    }
    Ok(FeatureStatus::from_targets(1))
}
