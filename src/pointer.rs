// Last known pointer position, and the push it gives to nearby particles

use vecmath::{vec2_len, vec2_normalized, vec2_scale, vec2_sub, Vector2};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerState {
    pub pos: Option<Vector2<f64>>,
}

impl PointerState {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pos = Some([x, y]);
    }

    // Displacement to apply to a particle at `point` this frame. Zero when the
    // pointer is unknown or outside `radius`. Inside, the push points away
    // from the pointer and grows linearly from 0 at the radius to `strength`
    // at the pointer itself. `heading` picks the direction when the particle
    // sits exactly on the pointer.
    pub fn repulsion(&self, point: Vector2<f64>, heading: Vector2<f64>, radius: f64, strength: f64) -> Vector2<f64> {
        let pointer = match self.pos {
            Some(pos) => pos,
            None => return [0.0, 0.0],
        };

        let away = vec2_sub(point, pointer);
        let distance = vec2_len(away);
        if distance >= radius {
            return [0.0, 0.0];
        }

        let direction = if distance > 0.0 {
            vec2_scale(away, 1.0 / distance)
        } else if vec2_len(heading) > 0.0 {
            vec2_normalized(heading)
        } else {
            [1.0, 0.0]
        };
        vec2_scale(direction, repulsion_falloff(distance, radius) * strength)
    }
}

// 1 at the pointer, 0 at the edge of the radius and beyond
pub fn repulsion_falloff(distance: f64, radius: f64) -> f64 {
    if distance >= radius {
        0.0
    } else {
        (radius - distance) / radius
    }
}
