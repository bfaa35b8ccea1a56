// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use limelight_core::config::Config;
use limelight_core::feature::FeatureStatus;
use limelight_core::feature::reveal::{self, ObserverOptions, RevealAction};

use super::{Handles, Page};
use crate::dom::query_all;
use crate::error::InitError;
use crate::observer::Observer;

pub(super) fn install(
    page: &Page,
    config: &Config,
    handles: &mut Handles,
) -> Result<FeatureStatus, InitError> {
    let elements = query_all(&page.document, &reveal::SELECTORS.join(", "))?;
    if elements.is_empty() {
        return Ok(FeatureStatus::NoTargets);
    }

    let observer = Observer::new(
        Some(ObserverOptions::from_config(config)),
        |entry, observer| match RevealAction::for_entry(entry.is_intersecting()) {
            RevealAction::RevealAndRelease => {
                let target = entry.target();
                let _ = target.class_list().add_1(reveal::VISIBLE_CLASS);
                observer.unobserve(&target);
            }
            RevealAction::Wait => {}
        },
    )?;
    for element in &elements {
        observer.observe(element);
    }
    handles.observe(observer);
    Ok(FeatureStatus::from_targets(elements.len()))
}
