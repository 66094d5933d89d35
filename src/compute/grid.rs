//! Double-buffered toroidal Life grid.
//!
//! Neighbor counts are always taken from the previous generation: rows of the
//! next generation are written into a scratch buffer in parallel, then the two
//! buffers swap so the new generation becomes visible all at once.

use rayon::prelude::*;

/// Conway rule B3/S23: born with exactly 3 neighbors, survives with 2 or 3.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    neighbors == 3 || (alive && neighbors == 2)
}

/// Boolean cell grid with wrap-around edges.
///
/// Data is stored row-major: index = y * width + x.
#[derive(Debug, Clone)]
pub struct LifeGrid {
    cells: Vec<bool>,
    /// Scratch buffer the next generation is written into before the swap.
    next: Vec<bool>,
    width: usize,
    height: usize,
}

impl LifeGrid {
    /// Create an all-dead grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![false; width * height],
            next: vec![false; width * height],
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

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert (x, y) coordinates to flat index.
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Row-major view of all cells.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells[self.idx(x, y)]
    }

    /// Live cells as (x, y) pairs in row-major order.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| (i % self.width, i / self.width))
            .collect()
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Population standard deviation of the 0/1 cell values: sqrt(p * (1 - p))
    /// where p is the alive fraction.
    pub fn entropy(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        let p = self.population() as f64 / self.cells.len() as f64;
        (p * (1.0 - p)).max(0.0).sqrt()
    }

    /// Count alive cells among the 8 wrapped neighbors of (x, y).
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        count_neighbors(&self.cells, self.width, self.height, x, y)
    }

    /// Replace every cell, visiting them in row-major order.
    pub(crate) fn fill_with(&mut self, mut alive: impl FnMut() -> bool) {
        for cell in self.cells.iter_mut() {
            *cell = alive();
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.idx(x, y);
        self.cells[idx] = alive;
    }

    /// Advance one generation in lockstep.
    pub(crate) fn advance(&mut self) {
        let width = self.width;
        let height = self.height;
        let current = &self.cells;

        self.next
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, out) in row.iter_mut().enumerate() {
                    let neighbors = count_neighbors(current, width, height, x, y);
                    *out = next_state(current[y * width + x], neighbors);
                }
            });

        std::mem::swap(&mut self.cells, &mut self.next);
    }
}

/// Periodic-boundary Moore neighborhood sum.
#[inline]
fn count_neighbors(cells: &[bool], width: usize, height: usize, x: usize, y: usize) -> u8 {
    let x_prev = (x + width - 1) % width;
    let x_next = (x + 1) % width;
    let y_prev = (y + height - 1) % height;
    let y_next = (y + 1) % height;

    let row_prev = y_prev * width;
    let row_curr = y * width;
    let row_next = y_next * width;

    [
        cells[row_prev + x_prev],
        cells[row_prev + x],
        cells[row_prev + x_next],
        cells[row_curr + x_prev],
        cells[row_curr + x_next],
        cells[row_next + x_prev],
        cells[row_next + x],
        cells[row_next + x_next],
    ]
    .iter()
    .filter(|&&alive| alive)
    .count() as u8
}
