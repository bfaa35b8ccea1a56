// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use limelight_core::feature::FeatureStatus;
use limelight_core::feature::stagger::GROUPS;

use super::Page;
use crate::dom::query_all;
use crate::error::InitError;

/// Tags grouped items with their reveal class and a numbered delay class.
pub(super) fn install(page: &Page) -> Result<FeatureStatus, InitError> {
    let mut targets = 0;
    for group in &GROUPS {
        for (index, item) in query_all(&page.document, group.selector)?
            .iter()
            .enumerate()
        {
            item.class_list()
                .add_2(group.class, &group.delay_class(index))?;
            targets += 1;
        }
    }
    Ok(FeatureStatus::from_targets(targets))
}
