// Tunables for the particle field and the page effects. The defaults give a
// dense, slowly drifting field of white and cyan dots joined by faint purple
// lines.

use crate::error::GlowError;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: u32,
    // Max distance at which two particles are joined by a line
    pub connection_distance: f64,
    // Radius around the pointer inside which particles are pushed away
    pub mouse_distance: f64,
    // Displacement applied at zero distance from the pointer, px/frame
    pub repulsion_strength: f64,
    // Width of the uniform velocity range, centered on zero
    pub drift_speed: f64,
    pub min_size: f64,
    pub size_range: f64,
    pub min_alpha: f64,
    pub alpha_range: f64,
    // Opacity of a connection line between two coincident particles
    pub line_opacity: f64,
    pub line_width: f64,
    // Above this many particles connections are found through a spatial grid
    pub grid_threshold: u32,
    pub exit_delay_ms: i32,
    pub log_frame_timing: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: 250,
            connection_distance: 110.0,
            mouse_distance: 200.0,
            repulsion_strength: 1.5,
            drift_speed: 0.3,
            min_size: 0.5,
            size_range: 2.0,
            min_alpha: 0.1,
            alpha_range: 0.5,
            line_opacity: 0.15,
            line_width: 0.5,
            grid_threshold: 400,
            exit_delay_ms: 700,
            log_frame_timing: false,
        }
    }
}

#[wasm_bindgen]
impl FieldConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FieldConfig {
        FieldConfig::default()
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), GlowError> {
        fn invalid(msg: &str) -> Result<(), GlowError> {
            Err(GlowError::InvalidConfig(msg.to_owned()))
        }

        let finite = [
            self.connection_distance,
            self.mouse_distance,
            self.repulsion_strength,
            self.drift_speed,
            self.min_size,
            self.size_range,
            self.line_width,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return invalid("distances, speeds and sizes must be finite");
        }
        if self.connection_distance <= 0.0 {
            return invalid("connection_distance must be positive");
        }
        if self.mouse_distance <= 0.0 {
            return invalid("mouse_distance must be positive");
        }
        // A push wider than the radius throws particles clear across it
        if self.repulsion_strength < 0.0 || self.repulsion_strength > self.mouse_distance {
            return invalid("repulsion_strength must be within [0, mouse_distance]");
        }
        if self.drift_speed < 0.0 {
            return invalid("drift_speed must not be negative");
        }
        if self.min_size < 0.0 || self.size_range < 0.0 {
            return invalid("particle sizes must not be negative");
        }
        if !(self.min_alpha > 0.0 && self.alpha_range >= 0.0 && self.min_alpha + self.alpha_range <= 1.0) {
            return invalid("particle alpha must stay within (0, 1]");
        }
        if !(0.0..=1.0).contains(&self.line_opacity) {
            return invalid("line_opacity must be within [0, 1]");
        }
        if self.line_width <= 0.0 {
            return invalid("line_width must be positive");
        }
        if self.exit_delay_ms < 0 {
            return invalid("exit_delay_ms must not be negative");
        }
        Ok(())
    }
}
