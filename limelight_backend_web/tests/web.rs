// Copyright 2026 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feature installers against a live document.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use js_sys::Promise;
use limelight_backend_web::{EventListener, RafLoop, detect, init};
use limelight_core::capability::HostCapabilities;
use limelight_core::config::Config;
use limelight_core::feature::{Feature, FeatureStatus};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, EventInit, HtmlElement, HtmlImageElement, MouseEvent,
    MouseEventInit, Window,
};

wasm_bindgen_test_configure!(run_in_browser);

fn page(html: &str) -> (Window, Document) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    document.body().unwrap().set_inner_html(html);
    (window, document)
}

fn select(document: &Document, selector: &str) -> Element {
    document.query_selector(selector).unwrap().unwrap()
}

fn cancelable(kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict(kind, &init).unwrap()
}

async fn next_frame(window: &Window) {
    let frame = Promise::new(&mut |resolve, _reject| {
        window.request_animation_frame(&resolve).unwrap();
    });
    JsFuture::from(frame).await.unwrap();
}

async fn sleep(window: &Window, millis: i32) {
    let timer = Promise::new(&mut |resolve, _reject| {
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            .unwrap();
    });
    JsFuture::from(timer).await.unwrap();
}

#[wasm_bindgen_test]
fn modern_browser_has_every_capability() {
    let window = web_sys::window().unwrap();
    assert_eq!(detect(&window), HostCapabilities::FULL);
}

#[wasm_bindgen_test]
fn empty_page_reports_no_targets() {
    let (window, _) = page("");
    let enhancements = init(&window, Config::new()).unwrap();
    let report = enhancements.report();

    assert_eq!(report.iter().count(), Feature::ALL.len());
    assert_eq!(report.status(Feature::Stagger), Some(FeatureStatus::NoTargets));
    assert_eq!(report.status(Feature::Parallax), Some(FeatureStatus::NoTargets));
    assert_eq!(report.status(Feature::Navbar), Some(FeatureStatus::NoTargets));
    assert_eq!(report.status(Feature::CursorTrail), Some(FeatureStatus::Disabled));
}

#[wasm_bindgen_test]
fn stagger_numbers_items_before_reveal_observes_them() {
    let (window, document) = page(
        r#"<div class="features10"><div class="item"></div><div class="item"></div></div>
           <div class="people04">
             <div class="item"></div><div class="item"></div><div class="item"></div>
             <div class="item"></div><div class="item"></div>
           </div>"#,
    );
    let enhancements = init(&window, Config::new()).unwrap();

    let items = document.query_selector_all(".people04 .item").unwrap();
    let fifth: Element = items.get(4).unwrap().unchecked_into();
    assert!(fifth.class_list().contains("stagger-item"));
    assert!(fifth.class_list().contains("delay-1"));

    let second = select(&document, ".features10 .item:nth-child(2)");
    assert!(second.class_list().contains("delay-2"));

    assert_eq!(
        enhancements.report().status(Feature::Reveal),
        Some(FeatureStatus::Installed { targets: 7 })
    );
}

#[wasm_bindgen_test]
fn carousel_pauses_on_hover_until_dropped() {
    let (window, document) = page(
        r#"<div class="embla" data-auto-play-interval="3"></div>
           <div class="embla" id="second" data-auto-play-interval="5"></div>"#,
    );
    let carousel = select(&document, ".embla");
    let second = select(&document, "#second");
    let enhancements = init(&window, Config::new()).unwrap();
    assert_eq!(
        enhancements.report().status(Feature::Carousel),
        Some(FeatureStatus::Installed { targets: 1 })
    );

    second.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    assert_eq!(
        second.get_attribute("data-auto-play-interval").as_deref(),
        Some("5"),
        "only the first carousel is enhanced"
    );

    carousel.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    assert_eq!(
        carousel.get_attribute("data-auto-play-interval").as_deref(),
        Some("0")
    );
    carousel.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    assert_eq!(
        carousel.get_attribute("data-auto-play-interval").as_deref(),
        Some("3")
    );

    drop(enhancements);
    carousel.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    assert_eq!(
        carousel.get_attribute("data-auto-play-interval").as_deref(),
        Some("3"),
        "listeners are detached on drop"
    );
}

#[wasm_bindgen_test]
fn ripple_replaces_the_previous_one() {
    let (window, document) = page(
        r#"<div class="btn" style="display:block;width:120px;height:40px;padding:0;border:0"></div>"#,
    );
    let button = select(&document, ".btn");
    let _enhancements = init(&window, Config::new()).unwrap();

    let event_init = MouseEventInit::new();
    event_init.set_client_x(10);
    event_init.set_client_y(10);
    for _ in 0..2 {
        let click = MouseEvent::new_with_mouse_event_init_dict("click", &event_init).unwrap();
        button.dispatch_event(&click).unwrap();
    }

    let ripples = button.query_selector_all(".ripple").unwrap();
    assert_eq!(ripples.length(), 1);
    let ripple: web_sys::HtmlElement = ripples.get(0).unwrap().unchecked_into();
    assert_eq!(ripple.style().get_property_value("width").unwrap(), "120px");
}

#[wasm_bindgen_test]
fn anchor_only_intercepts_resolvable_fragments() {
    let (window, document) = page(
        r##"<a id="to-target" href="#target">t</a>
            <a id="to-missing" href="#missing">m</a>
            <a id="to-top" href="#">top</a>
            <section id="target"></section>"##,
    );
    let _enhancements = init(&window, Config::new()).unwrap();

    let not_canceled = |id: &str| {
        select(&document, id)
            .dispatch_event(&cancelable("click"))
            .unwrap()
    };
    assert!(!not_canceled("#to-target"), "smooth scroll replaces navigation");
    assert!(not_canceled("#to-missing"));
    assert!(not_canceled("#to-top"));
}

#[wasm_bindgen_test]
fn native_lazy_loading_swaps_data_src() {
    let (window, document) =
        page(r#"<img loading="lazy" data-src="/assets/hero.png" src="/assets/blur.png">"#);
    let image: HtmlImageElement = select(&document, "img").unchecked_into();
    let enhancements = init(&window, Config::new()).unwrap();

    assert!(image.src().ends_with("/assets/hero.png"), "{}", image.src());
    assert_eq!(
        enhancements.report().status(Feature::LazyLoad),
        Some(FeatureStatus::Installed { targets: 1 })
    );
}

#[wasm_bindgen_test]
fn cursor_element_lives_as_long_as_the_enhancements() {
    let (window, document) = page("<a href=\"/\">home</a>");
    let enhancements = init(&window, Config::new().with_cursor_trail()).unwrap();

    let status = enhancements.report().status(Feature::CursorTrail);
    let present = || document.query_selector(".custom-cursor").unwrap().is_some();
    match status {
        Some(FeatureStatus::Installed { .. }) => assert!(present()),
        // Narrow headless viewport.
        Some(FeatureStatus::NoTargets) => assert!(!present()),
        other => panic!("unexpected cursor status {other:?}"),
    }

    drop(enhancements);
    assert!(!present());
}

#[wasm_bindgen_test]
fn navbar_and_parallax_count_their_targets() {
    let (window, _) = page(
        r#"<nav class="navbar"></nav>
           <div data-parallax="0.2"></div><div data-parallax></div>"#,
    );
    let enhancements = init(&window, Config::new()).unwrap();
    let report = enhancements.report();
    assert_eq!(
        report.status(Feature::Navbar),
        Some(FeatureStatus::Installed { targets: 1 })
    );
    assert_eq!(
        report.status(Feature::Parallax),
        Some(FeatureStatus::Installed { targets: 2 })
    );
}

#[wasm_bindgen_test]
fn passive_listener_ignores_prevent_default() {
    let (_, document) = page(r#"<div id="target"></div>"#);
    let target = select(&document, "#target");

    let passive = EventListener::passive(&target, "wheel", |event| event.prevent_default()).unwrap();
    assert!(target.dispatch_event(&cancelable("wheel")).unwrap());
    drop(passive);

    let blocking = EventListener::new(&target, "wheel", |event| event.prevent_default()).unwrap();
    assert!(!target.dispatch_event(&cancelable("wheel")).unwrap());
    drop(blocking);

    assert!(
        target.dispatch_event(&cancelable("wheel")).unwrap(),
        "listener is removed on drop"
    );
}

#[wasm_bindgen_test]
async fn scroll_burst_is_applied_on_the_next_frame() {
    let (window, document) = page(
        r#"<nav class="navbar"></nav>
           <div id="layer" data-parallax="0.2"></div>
           <div style="height:5000px"></div>"#,
    );
    let enhancements = init(&window, Config::new()).unwrap();
    let layer: HtmlElement = select(&document, "#layer").unchecked_into();
    let navbar: HtmlElement = select(&document, ".navbar").unchecked_into();

    window.scroll_to_with_x_and_y(0.0, 600.0);
    for _ in 0..3 {
        window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    }
    assert_eq!(
        layer.style().get_property_value("transform").unwrap(),
        "",
        "nothing is written until the frame"
    );

    next_frame(&window).await;

    let transform = layer.style().get_property_value("transform").unwrap();
    assert!(
        transform.starts_with("translate3d(0") && transform.contains("-120px"),
        "{transform}"
    );
    assert!(navbar.class_list().contains("scrolled"));
    assert_eq!(
        navbar.style().get_property_value("transform").unwrap(),
        "translateY(-100%)"
    );

    drop(enhancements);
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
async fn ripple_is_removed_after_its_lifetime() {
    let (window, document) = page(
        r#"<div class="btn" style="display:block;width:120px;height:40px;padding:0;border:0"></div>"#,
    );
    let button = select(&document, ".btn");
    let config = Config::new();
    let _enhancements = init(&window, config).unwrap();

    button.dispatch_event(&MouseEvent::new("click").unwrap()).unwrap();
    assert!(button.query_selector(".ripple").unwrap().is_some());

    sleep(&window, config.ripple_lifetime.as_timeout_millis() + 100).await;
    assert!(button.query_selector(".ripple").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn raf_loop_ticks_once_per_frame_until_stopped() {
    let window = web_sys::window().unwrap();
    let ticks = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&ticks);
    let raf = RafLoop::new(move |_| counter.set(counter.get() + 1));
    assert!(!raf.is_running());

    raf.start();
    raf.start();
    assert!(raf.is_running());
    next_frame(&window).await;
    next_frame(&window).await;
    assert_eq!(ticks.get(), 2, "a second start does not double-register");

    raf.stop();
    assert!(!raf.is_running());
    next_frame(&window).await;
    assert_eq!(ticks.get(), 2);
}
