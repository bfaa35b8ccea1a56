// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capability detection.

use js_sys::Reflect;
use limelight_core::capability::HostCapabilities;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Probes the browser once for the APIs the features depend on.
///
/// A probe that throws counts as "absent".
#[must_use]
pub fn detect(window: &Window) -> HostCapabilities {
    HostCapabilities::from_probes(
        has(window, "IntersectionObserver"),
        has(window, "requestAnimationFrame"),
        native_lazy_loading(window),
        has(window, "matchMedia"),
    )
}

fn has(target: &JsValue, name: &str) -> bool {
    Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

/// `'loading' in HTMLImageElement.prototype`.
fn native_lazy_loading(window: &Window) -> bool {
    let Ok(image) = Reflect::get(window, &JsValue::from_str("HTMLImageElement")) else {
        return false;
    };
    if image.is_undefined() {
        return false;
    }
    Reflect::get(&image, &JsValue::from_str("prototype"))
        .map(|proto| proto.is_object() && has(&proto, "loading"))
        .unwrap_or(false)
}
