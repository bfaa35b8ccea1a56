// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::RefCell;

use kurbo::Point;
use limelight_core::config::Config;
use limelight_core::feature::FeatureStatus;
use limelight_core::feature::cursor::{self, CursorHover, CursorTrail};
use wasm_bindgen::JsCast as _;
use web_sys::{HtmlElement, MouseEvent};

use super::{Handles, Page};
use crate::dom::{px, query_all};
use crate::error::InitError;
use crate::listener::EventListener;
use crate::raf::RafLoop;

fn set_hover(element: &HtmlElement, hover: CursorHover) {
    let style = element.style();
    let _ = style.set_property("transform", hover.transform());
    let _ = style.set_property("border-color", hover.border_color());
}

/// A ring that eases towards the pointer every frame. Narrow viewports
/// (touch devices, in practice) get nothing.
pub(super) fn install(
    page: &Page,
    config: &Config,
    handles: &mut Handles,
) -> Result<FeatureStatus, InitError> {
    let width = page.window.inner_width()?.as_f64().unwrap_or(0.0);
    if !cursor::fits_viewport(width, config) {
        log::debug!("cursor trail: viewport {width}px is too narrow");
        return Ok(FeatureStatus::NoTargets);
    }
    let body = page.document.body().ok_or(InitError::NoBody)?;

    let element: HtmlElement = page.document.create_element("div")?.unchecked_into();
    element.set_class_name(cursor::CURSOR_CLASS);
    element.set_attribute("style", &cursor::base_css(config))?;
    body.append_child(&element)?;
    handles.adopt(element.clone().into());

    let trail = Rc::new(RefCell::new(CursorTrail::new(config)));

    {
        let trail = Rc::clone(&trail);
        let element = element.clone();
        handles.listen(EventListener::new(&page.document, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let pointer = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
            if trail.borrow_mut().pointer_moved(pointer) {
                let _ = element.style().set_property("display", "block");
            }
        })?);
    }

    for target in query_all(&page.document, cursor::INTERACTIVE_SELECTOR)? {
        for (kind, hover) in [
            ("mouseenter", CursorHover::Active),
            ("mouseleave", CursorHover::Idle),
        ] {
            let element = element.clone();
            handles.listen(EventListener::new(&target, kind, move |_| {
                set_hover(&element, hover);
            })?);
        }
    }

    let raf = RafLoop::new(move |_tick| {
        let mut trail = trail.borrow_mut();
        if !trail.is_visible() {
            return;
        }
        let corner = trail.step();
        let style = element.style();
        let _ = style.set_property("left", &px(corner.x));
        let _ = style.set_property("top", &px(corner.y));
    });
    raf.start();
    handles.animate(raf);

    Ok(FeatureStatus::from_targets(1))
}
