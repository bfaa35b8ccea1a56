// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use limelight_core::config::Config;
use limelight_core::feature::FeatureStatus;
use limelight_core::feature::ripple;
use limelight_core::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, HtmlElement, MouseEvent, Window};

use super::{Handles, Page};
use crate::dom::{px, query_all};
use crate::error::InitError;
use crate::listener::EventListener;

/// Replaces any ripple in `button` with a fresh one centered on the click,
/// and schedules its removal.
fn spawn(
    window: &Window,
    document: &Document,
    button: &Element,
    event: &MouseEvent,
    lifetime: Duration,
) -> Result<(), InitError> {
    if let Some(old) = button.query_selector(ripple::RIPPLE_SELECTOR)? {
        old.remove();
    }

    let bounds = button.get_bounding_client_rect();
    let button_rect = Rect::new(
        bounds.left(),
        bounds.top(),
        bounds.left() + bounds.width(),
        bounds.top() + bounds.height(),
    );
    let click = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
    let rect = ripple::ripple_rect(button_rect, click);

    let span: HtmlElement = document.create_element(ripple::RIPPLE_TAG)?.unchecked_into();
    span.set_class_name(ripple::RIPPLE_CLASS);
    let style = span.style();
    style.set_property("width", &px(rect.width()))?;
    style.set_property("height", &px(rect.height()))?;
    style.set_property("left", &px(rect.x0))?;
    style.set_property("top", &px(rect.y0))?;
    button.append_child(&span)?;

    let expire = Closure::once_into_js(move || span.remove());
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        expire.unchecked_ref(),
        lifetime.as_timeout_millis(),
    )?;
    Ok(())
}

pub(super) fn install(
    page: &Page,
    config: &Config,
    handles: &mut Handles,
) -> Result<FeatureStatus, InitError> {
    let buttons = query_all(&page.document, ripple::BUTTON_SELECTOR)?;
    for button in &buttons {
        let window = page.window.clone();
        let document = page.document.clone();
        let target = button.clone();
        let lifetime = config.ripple_lifetime;
        handles.listen(EventListener::new(button, "click", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if let Err(err) = spawn(&window, &document, &target, event, lifetime) {
                log::warn!("ripple: {err}");
            }
        })?);
    }
    Ok(FeatureStatus::from_targets(buttons.len()))
}
