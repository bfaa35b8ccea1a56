// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use limelight_core::config::Config;
use limelight_core::feature::FeatureStatus;
use limelight_core::feature::carousel::{self, Hover};

use super::{Handles, Page};
use crate::error::InitError;
use crate::listener::EventListener;

/// Pauses autoplay while the pointer is over the page's carousel.
///
/// Only the first match is enhanced; later carousels keep their own
/// autoplay settings.
pub(super) fn install(
    page: &Page,
    config: &Config,
    handles: &mut Handles,
) -> Result<FeatureStatus, InitError> {
    let Some(element) = page.document.query_selector(carousel::SELECTOR)? else {
        return Ok(FeatureStatus::NoTargets);
    };
    for hover in [Hover::Enter, Hover::Leave] {
        let target = element.clone();
        let interval = hover.interval(config);
        handles.listen(EventListener::new(&element, hover.event_name(), move |_| {
            let _ = target.set_attribute(carousel::INTERVAL_ATTRIBUTE, interval);
        })?);
    }
    Ok(FeatureStatus::from_targets(1))
}
