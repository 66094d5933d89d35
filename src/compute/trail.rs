//! Decaying display buffer.
//!
//! A cell's trail value is 1.0 while it is alive and fades by the decay rate
//! each generation it stays dead, never dropping below 0.0.

use super::LifeGrid;

/// Per-cell trail intensity in [0, 1], same layout as [`LifeGrid`].
#[derive(Debug, Clone)]
pub struct Trail {
    values: Vec<f64>,
    width: usize,
    height: usize,
}

impl Trail {
    /// Create an all-zero trail.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            values: vec![0.0; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major view of all trail values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.values[y * self.width + x]
    }

    /// Overwrite with the float cast of the grid (alive = 1.0, dead = 0.0).
    pub(crate) fn reset_from(&mut self, grid: &LifeGrid) {
        for (value, &alive) in self.values.iter_mut().zip(grid.cells()) {
            *value = if alive { 1.0 } else { 0.0 };
        }
    }

    /// Refresh live cells to 1.0 and fade dead ones.
    pub(crate) fn decay(&mut self, grid: &LifeGrid, decay_rate: f64) {
        for (value, &alive) in self.values.iter_mut().zip(grid.cells()) {
            *value = if alive {
                1.0
            } else {
                (*value - decay_rate).max(0.0)
            };
        }
    }
}
