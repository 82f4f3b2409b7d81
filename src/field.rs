// The particle field: every particle, the viewport they bounce around in,
// and the pointer pushing them. Owned by the frame loop and shared with the
// pointer and resize listeners.

use crate::config::FieldConfig;
use crate::grid::SpatialGrid;
use crate::particle::Particle;
use crate::pointer::PointerState;
use rand::Rng;
use vecmath::{vec2_len, vec2_sub};

// A line to draw between two particles
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub alpha: f64,
}

pub struct ParticleField {
    width: f64,
    height: f64,
    config: FieldConfig,
    particles: Vec<Particle>,
    pointer: PointerState,
    grid: SpatialGrid,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, config: FieldConfig, rng: &mut R) -> Self {
        let mut field = ParticleField {
            width,
            height,
            config,
            particles: Vec::with_capacity(config.particle_count as usize),
            pointer: PointerState::default(),
            grid: SpatialGrid::new(),
        };
        field.reseed(rng);
        field
    }

    // Adopts a new viewport size and replaces every particle. The pointer is
    // kept; the next pointer move will correct it anyway.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.reseed(rng);
    }

    // Throws away every particle and spawns a fresh batch inside the viewport
    pub fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (width, height, config) = (self.width, self.height, self.config);
        self.particles.clear();
        self.particles
            .extend((0..config.particle_count).map(|_| Particle::random(rng, width, height, &config)));
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
    }

    // Advances every particle by one frame: drift, edge bounce, pointer push
    pub fn update(&mut self) {
        let (width, height) = (self.width, self.height);
        let radius = self.config.mouse_distance;
        let strength = self.config.repulsion_strength;
        let pointer = self.pointer;
        for particle in &mut self.particles {
            particle.step(width, height);
            let push = pointer.repulsion(particle.pos, particle.vel, radius, strength);
            particle.displace(push);
        }
    }

    // Every pair of particles close enough to be joined by a line. Small
    // fields are scanned pair by pair; the O(n^2) scan stops paying off
    // somewhere past a few hundred particles, so larger fields go through
    // the spatial grid instead.
    pub fn connections(&mut self) -> Vec<Connection> {
        let threshold = self.config.connection_distance;
        let line_opacity = self.config.line_opacity;
        let mut out = Vec::new();
        let mut push = |a: usize, b: usize, distance: f64| {
            out.push(Connection {
                a,
                b,
                distance,
                alpha: connection_opacity(distance, threshold) * line_opacity,
            });
        };

        if self.particles.len() <= self.config.grid_threshold as usize {
            for (i, p) in self.particles.iter().enumerate() {
                for (j, q) in self.particles.iter().enumerate().skip(i + 1) {
                    let distance = vec2_len(vec2_sub(p.pos, q.pos));
                    if distance < threshold {
                        push(i, j, distance);
                    }
                }
            }
        } else {
            self.grid.rebuild(&self.particles, threshold, self.width, self.height);
            self.grid.for_each_pair_within(&self.particles, threshold, push);
        }
        out
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

// Opacity of a connection line before scaling: 1 for touching particles,
// fading linearly to 0 at the threshold
pub fn connection_opacity(distance: f64, threshold: f64) -> f64 {
    if distance >= threshold {
        0.0
    } else {
        1.0 - distance / threshold
    }
}
