//! Seed types for (re)initializing a Life grid.

use serde::{Deserialize, Serialize};

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Random { probability: 0.15 },
        }
    }
}

impl Seed {
    pub fn random(probability: f64) -> Self {
        Self {
            pattern: Pattern::Random { probability },
        }
    }

    pub fn cells(cells: Vec<(usize, usize)>) -> Self {
        Self {
            pattern: Pattern::Cells { cells },
        }
    }

    pub fn void() -> Self {
        Self {
            pattern: Pattern::Void,
        }
    }
}

/// Predefined patterns for initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Every cell independently alive with the given probability.
    Random { probability: f64 },
    /// Exactly these (x, y) cells alive, everything else dead.
    Cells { cells: Vec<(usize, usize)> },
    /// All cells dead.
    Void,
}
