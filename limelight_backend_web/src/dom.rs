// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small DOM query helpers.

use alloc::vec::Vec;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::error::InitError;

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`InitError::Js`] for a selector the browser rejects.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, InitError> {
    query_all_as(document, selector)
}

/// Like [`query_all`], keeping only elements of type `T`.
pub(crate) fn query_all_as<T: JsCast>(
    document: &Document,
    selector: &str,
) -> Result<Vec<T>, InitError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

/// Writes `value` in CSS pixels, e.g. `12.5px`.
pub(crate) fn px(value: f64) -> alloc::string::String {
    alloc::format!("{value}px")
}
