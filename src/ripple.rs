// Click and tap ripples. Each ripple is a short-lived div; the page CSS
// animates it and the div removes itself when the animation ends.

use crate::dom::{self, EventListener};
use crate::error::GlowError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use js_sys::Function;
use web_sys::{Document, HtmlElement, MouseEvent, TouchEvent};

pub const RIPPLE_CLASS: &str = "cursor-ripple";

pub fn install(document: &Document) -> Result<Vec<EventListener>, GlowError> {
    let on_click = {
        let doc = document.clone();
        EventListener::new(document, "click", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let (x, y) = (event.client_x() as f64, event.client_y() as f64);
                if let Err(err) = spawn(&doc, x, y) {
                    dom::report(err);
                }
            }
        })?
    };

    let on_touch = {
        let doc = document.clone();
        EventListener::new(document, "touchstart", move |event| {
            let touch = match event.dyn_ref::<TouchEvent>().and_then(|e| e.touches().get(0)) {
                Some(touch) => touch,
                None => return,
            };
            let (x, y) = (touch.client_x() as f64, touch.client_y() as f64);
            if let Err(err) = spawn(&doc, x, y) {
                dom::report(err);
            }
        })?
    };

    Ok(vec![on_click, on_touch])
}

// Creates one ripple centered at the given client coordinates
pub fn spawn(document: &Document, x: f64, y: f64) -> Result<HtmlElement, GlowError> {
    let ripple = dom::create_div(document, RIPPLE_CLASS)?;
    dom::place(&ripple, x, y)?;
    dom::body(document)?.append_child(&ripple)?;

    let target = ripple.clone();
    let on_end = Closure::once_into_js(move || target.remove());
    ripple.add_event_listener_with_callback("animationend", on_end.unchecked_ref::<Function>())?;
    Ok(ripple)
}
