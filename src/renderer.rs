// Renderer struct that handles canvas 2d calls: clearing the frame, drawing
// particles as filled circles and connections as faint lines.

use crate::color::Color;
use crate::dom;
use crate::error::GlowError;
use crate::field::Connection;
use crate::particle::Particle;
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Renderer {
    pub context: CanvasRenderingContext2d,
    pub line_width: f64,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement, line_width: f64) -> Result<Self, GlowError> {
        let context = dom::context_2d(canvas)?;
        Ok(Renderer { context, line_width })
    }

    pub fn clear_screen(&self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    #[allow(deprecated)]
    pub fn render_particles(&self, particles: &[Particle]) {
        for p in particles {
            self.context.begin_path();
            if let Err(err) = self.context.arc(p.pos[0], p.pos[1], p.size, 0.0, PI * 2.0) {
                // Only a negative radius makes arc throw
                console::error_1(&err);
                continue;
            }
            self.context
                .set_fill_style(&JsValue::from_str(&p.color.to_css(p.alpha)));
            self.context.fill();
        }
    }

    #[allow(deprecated)]
    pub fn render_connections(&self, particles: &[Particle], connections: &[Connection]) {
        self.context.set_line_width(self.line_width);
        for c in connections {
            let (from, to) = (particles[c.a].pos, particles[c.b].pos);
            self.context.begin_path();
            self.context
                .set_stroke_style(&JsValue::from_str(&Color::LINE.to_css(c.alpha)));
            self.context.move_to(from[0], from[1]);
            self.context.line_to(to[0], to[1]);
            self.context.stroke();
        }
    }
}
