//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use glow_particles::{
    install_cursor_ripples, install_page_transitions, start, start_with_config, FieldConfig, DEFAULT_CANVAS_ID,
};
use std::sync::Once;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

static RIPPLES: Once = Once::new();

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn add_canvas(id: &str) {
    let document = document();
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let canvas = document.create_element("canvas").unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
}

fn count(selector: &str) -> u32 {
    document().query_selector_all(selector).unwrap().length()
}

#[allow(deprecated)]
fn cancelable_click() -> Event {
    let mut init = EventInit::new();
    init.bubbles(true).cancelable(true);
    Event::new_with_event_init_dict("click", &init).unwrap()
}

#[allow(deprecated)]
fn mouse_move(x: i32, y: i32) -> MouseEvent {
    let mut init = MouseEventInit::new();
    init.client_x(x).client_y(y);
    MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap()
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_error() {
    let err = start("no-such-canvas").err().unwrap();
    assert_eq!(err.as_string().unwrap(), "no element with id `no-such-canvas`");
}

#[wasm_bindgen_test]
fn non_canvas_element_is_an_error() {
    let document = document();
    let div = document.create_element("div").unwrap();
    div.set_id("not-a-canvas");
    document.body().unwrap().append_child(&div).unwrap();
    assert!(start("not-a-canvas").is_err());
}

#[wasm_bindgen_test]
fn start_and_stop() {
    add_canvas(DEFAULT_CANVAS_ID);
    let mut handle = start(DEFAULT_CANVAS_ID).unwrap();
    assert!(handle.is_running());
    assert_eq!(handle.particle_count(), 250);
    assert_eq!(count(".cursor-dot"), 1);

    handle.stop();
    assert!(!handle.is_running());
    assert_eq!(count(".cursor-dot"), 0);
    handle.stop();
}

#[wasm_bindgen_test]
fn restart_keeps_a_single_cursor_dot() {
    add_canvas(DEFAULT_CANVAS_ID);
    let first = start(DEFAULT_CANVAS_ID).unwrap();
    drop(first);
    let mut second = start(DEFAULT_CANVAS_ID).unwrap();
    assert_eq!(count(".cursor-dot"), 1);
    second.stop();
}

#[wasm_bindgen_test]
fn custom_particle_count() {
    add_canvas("small-canvas");
    let mut config = FieldConfig::new();
    config.particle_count = 12;
    let mut handle = start_with_config("small-canvas", config).unwrap();
    assert_eq!(handle.particle_count(), 12);
    handle.stop();
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    add_canvas("bad-config-canvas");
    let mut config = FieldConfig::new();
    config.connection_distance = 0.0;
    assert!(start_with_config("bad-config-canvas", config).is_err());

    let mut config = FieldConfig::new();
    config.mouse_distance = f64::INFINITY;
    assert!(start_with_config("bad-config-canvas", config).is_err());
}

#[wasm_bindgen_test]
fn mouse_move_updates_pointer_and_dot() {
    add_canvas(DEFAULT_CANVAS_ID);
    let mut handle = start(DEFAULT_CANVAS_ID).unwrap();
    assert_eq!(handle.pointer_x(), None);

    web_sys::window().unwrap().dispatch_event(&mouse_move(120, 80)).unwrap();
    assert_eq!(handle.pointer_x(), Some(120.0));
    assert_eq!(handle.pointer_y(), Some(80.0));

    let dot = document()
        .query_selector(".cursor-dot")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    assert_eq!(dot.style().get_property_value("left").unwrap(), "120px");
    assert_eq!(dot.style().get_property_value("top").unwrap(), "80px");
    handle.stop();
}

#[wasm_bindgen_test]
fn ripple_appears_on_click_and_leaves_on_animation_end() {
    RIPPLES.call_once(|| install_cursor_ripples().unwrap());
    let document = document();
    document.body().unwrap().click();
    let ripples = document.query_selector_all(".cursor-ripple").unwrap();
    assert!(ripples.length() > 0);

    for i in 0..ripples.length() {
        let ripple = ripples.item(i).unwrap();
        ripple.dispatch_event(&Event::new("animationend").unwrap()).unwrap();
    }
    assert_eq!(count(".cursor-ripple"), 0);
}

#[wasm_bindgen_test]
fn same_tab_link_click_starts_exit() {
    let document = document();
    let body = document.body().unwrap();
    let link = document.create_element("a").unwrap();
    link.set_attribute("href", "#exit-target").unwrap();
    body.append_child(&link).unwrap();
    install_page_transitions(60_000).unwrap();

    let proceeded = link.dispatch_event(&cancelable_click()).unwrap();
    assert!(!proceeded);
    assert!(body.class_list().contains("is-exiting"));

    body.class_list().remove_1("is-exiting").unwrap();
    link.remove();
}
