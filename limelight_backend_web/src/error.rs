// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Initialization errors.

use alloc::format;
use alloc::string::{String, ToString as _};

use wasm_bindgen::JsValue;

/// Why the page (or one feature) could not be set up.
///
/// Only [`NoWindow`](Self::NoWindow) and [`NoDocument`](Self::NoDocument)
/// abort [`init`](crate::init) as a whole. Every other error is confined to
/// the feature that raised it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    /// No global `window` object (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,
    /// The window has no `document`.
    #[error("window has no document")]
    NoDocument,
    /// The document has no `<body>` to attach elements to.
    #[error("document has no body")]
    NoBody,
    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for InitError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<InitError> for JsValue {
    fn from(err: InitError) -> Self {
        Self::from_str(&err.to_string())
    }
}
