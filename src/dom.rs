// Helper functions for dealing with the DOM: looking up the window, document,
// body and canvas, creating the small effect elements, and event listeners
// that unregister themselves when dropped.

use crate::error::GlowError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Event, EventTarget, HtmlCanvasElement, HtmlElement, Window,
};

pub fn window() -> Result<Window, GlowError> {
    web_sys::window().ok_or(GlowError::NoWindow)
}

pub fn document() -> Result<Document, GlowError> {
    window()?.document().ok_or(GlowError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement, GlowError> {
    document.body().ok_or(GlowError::NoBody)
}

pub fn canvas_by_id(document: &Document, id: &str) -> Result<HtmlCanvasElement, GlowError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GlowError::CanvasNotFound(id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| GlowError::NotACanvas(id.to_owned()))
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, GlowError> {
    canvas
        .get_context("2d")?
        .ok_or(GlowError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| GlowError::ContextUnavailable)
}

pub fn viewport_size(window: &Window) -> Result<(f64, f64), GlowError> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

// Sizes the canvas backing store to the viewport and returns the new size
pub fn fit_canvas_to_viewport(window: &Window, canvas: &HtmlCanvasElement) -> Result<(f64, f64), GlowError> {
    let (width, height) = viewport_size(window)?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Ok((width, height))
}

pub fn create_div(document: &Document, class: &str) -> Result<HtmlElement, GlowError> {
    let div = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| GlowError::Js("created div is not an HtmlElement".to_owned()))?;
    div.set_class_name(class);
    Ok(div)
}

// Moves an absolutely positioned element so its left/top sit at (x, y)
pub fn place(element: &HtmlElement, x: f64, y: f64) -> Result<(), GlowError> {
    let style = element.style();
    style.set_property("left", &format!("{}px", x))?;
    style.set_property("top", &format!("{}px", y))?;
    Ok(())
}

pub fn report(err: GlowError) {
    web_sys::console::error_1(&JsValue::from(err));
}

// An event listener that is removed from its target when dropped
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(Event)>>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, GlowError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(EventListener {
            target: target.clone(),
            event,
            closure: Some(closure),
        })
    }

    // Keeps the listener installed for the lifetime of the page
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}
