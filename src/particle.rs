// Simple particle struct to keep track of individual position, velocity, size and color

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;
use vecmath::{vec2_add, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub color: Color,
    pub alpha: f64,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, size: f64, color: Color, alpha: f64) -> Particle {
        Particle {
            pos,
            vel,
            size,
            color,
            alpha,
        }
    }

    // Spawns a slowly drifting particle anywhere inside a width x height viewport
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let pos = [rng.gen::<f64>() * width, rng.gen::<f64>() * height];
        let vel = [
            (rng.gen::<f64>() - 0.5) * config.drift_speed,
            (rng.gen::<f64>() - 0.5) * config.drift_speed,
        ];
        let size = rng.gen::<f64>() * config.size_range + config.min_size;
        let color = Color::random_particle(rng);
        let alpha = rng.gen::<f64>() * config.alpha_range + config.min_alpha;
        Particle::new(pos, vel, size, color, alpha)
    }

    // Advances one frame and reflects velocity off the viewport edges.
    // Position is left unclamped, so a particle can sit up to one step
    // outside the viewport for the frame in which it bounces. A particle
    // displaced more than one step past an edge flips every frame and hovers
    // out there until something pushes it back in.
    pub fn step(&mut self, width: f64, height: f64) {
        self.pos = vec2_add(self.pos, self.vel);

        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }

    pub fn displace(&mut self, by: Vector2<f64>) {
        self.pos = vec2_add(self.pos, by);
    }
}
