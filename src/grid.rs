// Uniform bucket grid over particle positions. With a cell side at least as
// large as the search distance, every pair closer than that distance lies in
// the same cell or in two adjacent cells, so only the 3x3 neighbourhood of a
// cell has to be scanned.

use crate::particle::Particle;
use vecmath::{vec2_len, vec2_sub};

// Half of the 8-neighbourhood; visiting only these keeps every pair unique
const FORWARD_NEIGHBOURS: [(isize, isize); 4] = [(1, 0), (-1, 1), (0, 1), (1, 1)];

#[derive(Debug, Default)]
pub struct SpatialGrid {
    cell_size: f64,
    cols: usize,
    rows: usize,
    cells: Vec<Vec<usize>>,
}

impl SpatialGrid {
    pub fn new() -> Self {
        SpatialGrid::default()
    }

    // Buckets particle indices by position over a width x height viewport.
    // Particles outside the viewport land in the nearest edge cell, so the
    // cell count only depends on the viewport. Cell storage is reused between
    // rebuilds so a steady-state frame does not allocate.
    pub fn rebuild(&mut self, particles: &[Particle], cell_size: f64, width: f64, height: f64) {
        for cell in &mut self.cells {
            cell.clear();
        }
        self.cell_size = cell_size;
        self.cols = cells_across(width, cell_size);
        self.rows = cells_across(height, cell_size);
        if self.cells.len() < self.cols * self.rows {
            self.cells.resize_with(self.cols * self.rows, Vec::new);
        }

        for (i, p) in particles.iter().enumerate() {
            let (col, row) = self.cell_of(p.pos);
            let idx = row * self.cols + col;
            self.cells[idx].push(i);
        }
    }

    // Clamping keeps any two points less than a cell apart in the same or
    // adjacent cells. NaN lands in cell 0.
    fn cell_of(&self, pos: [f64; 2]) -> (usize, usize) {
        let col = (pos[0] / self.cell_size).floor().max(0.0) as usize;
        let row = (pos[1] / self.cell_size).floor().max(0.0) as usize;
        (col.min(self.cols - 1), row.min(self.rows - 1))
    }

    fn cell(&self, col: isize, row: isize) -> Option<&[usize]> {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return None;
        }
        Some(&self.cells[row as usize * self.cols + col as usize])
    }

    // Calls `f(a, b, distance)` once for every unordered pair closer than
    // `max_distance`, with `a < b`. `max_distance` must not exceed the cell
    // size the grid was built with.
    pub fn for_each_pair_within<F>(&self, particles: &[Particle], max_distance: f64, mut f: F)
    where
        F: FnMut(usize, usize, f64),
    {
        debug_assert!(max_distance <= self.cell_size);

        let mut visit = |i: usize, j: usize| {
            let distance = vec2_len(vec2_sub(particles[i].pos, particles[j].pos));
            if distance < max_distance {
                f(i.min(j), i.max(j), distance);
            }
        };

        for row in 0..self.rows as isize {
            for col in 0..self.cols as isize {
                let here = match self.cell(col, row) {
                    Some(cell) => cell,
                    None => continue,
                };
                for (n, &i) in here.iter().enumerate() {
                    for &j in &here[n + 1..] {
                        visit(i, j);
                    }
                }
                for &(dc, dr) in FORWARD_NEIGHBOURS.iter() {
                    if let Some(other) = self.cell(col + dc, row + dr) {
                        for &i in here {
                            for &j in other {
                                visit(i, j);
                            }
                        }
                    }
                }
            }
        }
    }
}

// At least one cell, so an empty viewport still has somewhere to put particles
fn cells_across(extent: f64, cell_size: f64) -> usize {
    if extent.is_finite() && extent > 0.0 {
        (extent / cell_size).ceil().max(1.0) as usize
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::config::FieldConfig;
    use rand::{rngs::StdRng, SeedableRng};

    fn at(x: f64, y: f64) -> Particle {
        Particle::new([x, y], [0.0, 0.0], 1.0, Color::WHITE, 0.5)
    }

    fn brute_force(particles: &[Particle], max_distance: f64) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..particles.len() {
            for j in i + 1..particles.len() {
                if vec2_len(vec2_sub(particles[i].pos, particles[j].pos)) < max_distance {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    fn grid_pairs(particles: &[Particle], max_distance: f64) -> Vec<(usize, usize)> {
        let mut grid = SpatialGrid::new();
        grid.rebuild(particles, max_distance, 800.0, 600.0);
        let mut pairs = Vec::new();
        grid.for_each_pair_within(particles, max_distance, |a, b, _| pairs.push((a, b)));
        pairs.sort();
        pairs
    }

    #[test]
    fn empty_grid_has_no_pairs() {
        assert!(grid_pairs(&[], 110.0).is_empty());
    }

    #[test]
    fn finds_pairs_across_cell_borders() {
        let particles = vec![at(109.0, 0.0), at(111.0, 0.0), at(0.0, 0.0), at(500.0, 500.0)];
        assert_eq!(grid_pairs(&particles, 110.0), vec![(0, 1), (0, 2)]);
    }

    #[test]
    fn diagonal_neighbours_are_found() {
        let particles = vec![at(105.0, 115.0), at(115.0, 105.0), at(0.0, 0.0), at(220.0, 0.0)];
        assert_eq!(grid_pairs(&particles, 110.0), brute_force(&particles, 110.0));
    }

    #[test]
    fn matches_brute_force_on_random_fields() {
        let mut rng = StdRng::seed_from_u64(77);
        let config = FieldConfig::default();
        for &(w, h) in &[(800.0, 600.0), (1920.0, 1080.0), (50.0, 50.0)] {
            let particles: Vec<Particle> = (0..600).map(|_| Particle::random(&mut rng, w, h, &config)).collect();
            assert_eq!(grid_pairs(&particles, 110.0), brute_force(&particles, 110.0));
        }
    }

    #[test]
    fn far_outliers_do_not_grow_the_grid() {
        let mut particles = vec![at(1e9, 1e9), at(-1e9, 5.0), at(1e9 + 50.0, 1e9), at(10.0, 10.0)];
        particles.push(at(f64::NAN, 3.0));
        let mut grid = SpatialGrid::new();
        grid.rebuild(&particles, 110.0, 800.0, 600.0);
        assert_eq!((grid.cols, grid.rows), (8, 6));
        assert_eq!(grid.cells.len(), 48);
        assert_eq!(grid_pairs(&particles, 110.0), brute_force(&particles, 110.0));
        assert_eq!(grid_pairs(&particles, 110.0), vec![(0, 2)]);
    }

    #[test]
    fn empty_viewport_uses_a_single_cell() {
        let particles = vec![at(0.0, 0.0), at(0.1, 0.1), at(200.0, 0.0)];
        let mut grid = SpatialGrid::new();
        grid.rebuild(&particles, 110.0, 0.0, 0.0);
        assert_eq!((grid.cols, grid.rows), (1, 1));
        let mut pairs = Vec::new();
        grid.for_each_pair_within(&particles, 110.0, |a, b, _| pairs.push((a, b)));
        assert_eq!(pairs, vec![(0, 1)]);
    }

    #[test]
    fn handles_positions_outside_the_viewport() {
        let particles = vec![at(-0.1, -0.1), at(50.0, 50.0), at(800.1, 600.1)];
        assert_eq!(grid_pairs(&particles, 110.0), brute_force(&particles, 110.0));
    }
}
