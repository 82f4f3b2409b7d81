// Page-exit transition: same-tab links fade the page out before navigating

use crate::dom::{self, EventListener};
use crate::error::GlowError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use js_sys::Function;
use web_sys::{Document, HtmlAnchorElement};

pub const EXITING_CLASS: &str = "is-exiting";

// Links opening a new tab navigate normally, as do anchors without an href
pub fn should_intercept(href: &str, target: &str) -> bool {
    !href.is_empty() && target != "_blank"
}

// Hooks every link currently in the document
pub fn install(document: &Document, delay_ms: i32) -> Result<Vec<EventListener>, GlowError> {
    let links = document.query_selector_all("a")?;
    let mut listeners = Vec::new();
    for i in 0..links.length() {
        let anchor = match links.item(i).and_then(|node| node.dyn_into::<HtmlAnchorElement>().ok()) {
            Some(anchor) => anchor,
            None => continue,
        };
        if !should_intercept(&anchor.href(), &anchor.target()) {
            continue;
        }

        let link = anchor.clone();
        listeners.push(EventListener::new(&anchor, "click", move |event| {
            event.prevent_default();
            if let Err(err) = begin_exit(&link.href(), delay_ms) {
                dom::report(err);
            }
        })?);
    }
    Ok(listeners)
}

// Marks the body as exiting and navigates to `href` after `delay_ms`
pub fn begin_exit(href: &str, delay_ms: i32) -> Result<(), GlowError> {
    let window = dom::window()?;
    let document = window.document().ok_or(GlowError::NoDocument)?;
    dom::body(&document)?.class_list().add_1(EXITING_CLASS)?;

    let href = href.to_owned();
    let location = window.location();
    let navigate = Closure::once_into_js(move || {
        if let Err(err) = location.set_href(&href) {
            web_sys::console::error_1(&err);
        }
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(navigate.unchecked_ref::<Function>(), delay_ms)?;
    Ok(())
}
