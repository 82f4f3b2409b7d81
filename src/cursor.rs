// Custom cursor dot, and pointer tracking for the particle field

use crate::dom::{self, EventListener};
use crate::error::GlowError;
use crate::field::ParticleField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

pub const CURSOR_DOT_CLASS: &str = "cursor-dot";

// The dot element and its mousemove listener. Dropping it unhooks the
// listener and takes the dot off the page.
pub struct CursorDot {
    element: HtmlElement,
    _on_move: EventListener,
}

impl Drop for CursorDot {
    fn drop(&mut self) {
        self.element.remove();
    }
}

// Appends the cursor dot to the body and keeps it, and the field's pointer,
// on top of the mouse
pub fn install(
    window: &Window,
    document: &Document,
    field: Rc<RefCell<ParticleField>>,
) -> Result<CursorDot, GlowError> {
    let element = dom::create_div(document, CURSOR_DOT_CLASS)?;
    dom::body(document)?.append_child(&element)?;

    let dot = element.clone();
    let on_move = EventListener::new(window, "mousemove", move |event| {
        let event = match event.dyn_ref::<MouseEvent>() {
            Some(event) => event,
            None => return,
        };
        let (x, y) = (event.client_x() as f64, event.client_y() as f64);
        field.borrow_mut().set_pointer(x, y);
        if let Err(err) = dom::place(&dot, x, y) {
            dom::report(err);
        }
    });

    match on_move {
        Ok(on_move) => Ok(CursorDot {
            element,
            _on_move: on_move,
        }),
        Err(err) => {
            element.remove();
            Err(err)
        }
    }
}
