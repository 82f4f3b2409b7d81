#[macro_use]
mod utils;
mod animation;
mod color;
mod config;
mod cursor;
mod dom;
mod error;
mod field;
mod grid;
mod particle;
mod pointer;
mod renderer;
mod ripple;
mod transition;

use animation::AnimationLoop;
use cursor::CursorDot;
use dom::EventListener;
use renderer::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use utils::Timer;
use wasm_bindgen::prelude::*;

pub use color::Color;
pub use config::FieldConfig;
pub use error::GlowError;
pub use field::{connection_opacity, Connection, ParticleField};
pub use particle::Particle;
pub use pointer::{repulsion_falloff, PointerState};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub const DEFAULT_CANVAS_ID: &str = "bg-canvas";

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// Handle to a running background. Dropping or stopping it halts the frame
// loop, unhooks every listener `start` installed and removes the cursor dot.
#[wasm_bindgen]
pub struct GlowHandle {
    animation: AnimationLoop,
    field: Rc<RefCell<ParticleField>>,
    cursor: Option<CursorDot>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl GlowHandle {
    pub fn stop(&mut self) {
        if self.animation.is_running() {
            self.animation.stop();
            self.cursor = None;
            self.listeners.clear();
            log!("glow: stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.field.borrow().particles().len()
    }

    // Last pointer position seen by the field, if the mouse has moved yet
    pub fn pointer_x(&self) -> Option<f64> {
        self.field.borrow().pointer().pos.map(|pos| pos[0])
    }

    pub fn pointer_y(&self) -> Option<f64> {
        self.field.borrow().pointer().pos.map(|pos| pos[1])
    }
}

// Starts the particle background on the canvas with the given id, along with
// the cursor dot, click ripples and link transitions
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<GlowHandle, JsValue> {
    start_with_config(canvas_id, FieldConfig::default())
}

#[wasm_bindgen]
pub fn start_with_config(canvas_id: &str, config: FieldConfig) -> Result<GlowHandle, JsValue> {
    Ok(run(canvas_id, config)?)
}

// Installs only the link transitions, for pages without a particle canvas
#[wasm_bindgen]
pub fn install_page_transitions(delay_ms: i32) -> Result<(), JsValue> {
    let document = dom::document()?;
    for listener in transition::install(&document, delay_ms)? {
        listener.forget();
    }
    Ok(())
}

#[wasm_bindgen]
pub fn install_cursor_ripples() -> Result<(), JsValue> {
    let document = dom::document()?;
    for listener in ripple::install(&document)? {
        listener.forget();
    }
    Ok(())
}

fn run(canvas_id: &str, config: FieldConfig) -> Result<GlowHandle, GlowError> {
    config.validate()?;

    let window = dom::window()?;
    let document = window.document().ok_or(GlowError::NoDocument)?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let renderer = Renderer::new(&canvas, config.line_width)?;

    let (width, height) = dom::fit_canvas_to_viewport(&window, &canvas)?;
    let field = Rc::new(RefCell::new(ParticleField::new(
        width,
        height,
        config,
        &mut rand::thread_rng(),
    )));
    log!(
        "glow: {} particles on {}x{} canvas `{}`",
        config.particle_count,
        width,
        height,
        canvas_id
    );

    let cursor = cursor::install(&window, &document, field.clone())?;

    let mut listeners = Vec::new();

    let resize_field = field.clone();
    let resize_window = window.clone();
    listeners.push(EventListener::new(&window, "resize", move |_| {
        match dom::fit_canvas_to_viewport(&resize_window, &canvas) {
            Ok((width, height)) => {
                resize_field
                    .borrow_mut()
                    .resize(width, height, &mut rand::thread_rng());
                log!("glow: reseeded for {}x{}", width, height);
            }
            Err(err) => dom::report(err),
        }
    })?);

    listeners.extend(ripple::install(&document)?);
    listeners.extend(transition::install(&document, config.exit_delay_ms)?);

    let frame_field = field.clone();
    let animation = AnimationLoop::start(move || {
        let _timer = if config.log_frame_timing {
            Some(Timer::new("glow frame"))
        } else {
            None
        };
        let mut field = frame_field.borrow_mut();
        let (width, height) = field.size();
        renderer.clear_screen(width, height);
        field.update();
        let connections = field.connections();
        renderer.render_particles(field.particles());
        renderer.render_connections(field.particles(), &connections);
    })?;

    Ok(GlowHandle {
        animation,
        field,
        cursor: Some(cursor),
        listeners,
    })
}
