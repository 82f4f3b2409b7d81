// requestAnimationFrame loop that keeps rescheduling itself until cancelled

use crate::dom;
use crate::error::GlowError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use js_sys::Function;
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

// Shared flag checked once per frame. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Rc<Cell<bool>>);

impl CancellationToken {
    pub fn new() -> Self {
        CancellationToken::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

pub struct AnimationLoop {
    window: Window,
    token: CancellationToken,
    frame_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl AnimationLoop {
    // Runs `on_frame` once per display refresh until `stop` is called
    pub fn start<F>(mut on_frame: F) -> Result<AnimationLoop, GlowError>
    where
        F: FnMut() + 'static,
    {
        let window = dom::window()?;
        let token = CancellationToken::new();
        let frame_id = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let next = callback.clone();
        let (frame_token, frame_window, pending) = (token.clone(), window.clone(), frame_id.clone());
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending.set(None);
            if frame_token.is_cancelled() {
                return;
            }
            on_frame();
            if frame_token.is_cancelled() {
                return;
            }
            if let Some(closure) = next.borrow().as_ref() {
                match request_frame(&frame_window, closure) {
                    Ok(id) => pending.set(Some(id)),
                    Err(err) => dom::report(err),
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(closure) = callback.borrow().as_ref() {
            frame_id.set(Some(request_frame(&window, closure)?));
        }

        Ok(AnimationLoop {
            window,
            token,
            frame_id,
            callback,
        })
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    // Cancels the pending frame and frees the frame closure. Must not be
    // called from inside the frame callback itself.
    pub fn stop(&self) {
        self.token.cancel();
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(window: &Window, closure: &Closure<dyn FnMut()>) -> Result<i32, GlowError> {
    Ok(window.request_animation_frame(closure.as_ref().unchecked_ref::<Function>())?)
}
