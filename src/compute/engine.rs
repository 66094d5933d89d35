//! Life engine - owns the grid, the trail and the generation history.

use log::{debug, trace};
use rand::prelude::*;

use crate::schema::{ConfigError, EngineConfig, HistoryRecord, Pattern, Seed, check_probability};

use super::{LifeGrid, Trail};

/// Toroidal Game of Life with a decaying display trail.
///
/// ```rust
/// use life_genesis::Engine;
///
/// let mut engine = Engine::new(32, 32, 0.1).unwrap();
/// engine.randomize(0.2).unwrap();
/// engine.run(10);
/// assert_eq!(engine.get_full_history().len(), 10);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    grid: LifeGrid,
    trail: Trail,
    history: Vec<HistoryRecord>,
    step_count: u64,
    rng: StdRng,
}

impl Engine {
    /// Create an all-dead engine.
    pub fn new(width: usize, height: usize, decay_rate: f64) -> Result<Self, ConfigError> {
        Self::from_config(EngineConfig::new(width, height, decay_rate))
    }

    /// Create an all-dead engine, seeding the RNG from entropy.
    pub fn from_config(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an all-dead engine whose `randomize` calls are reproducible.
    pub fn with_rng_seed(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            "engine {}x{} (decay {})",
            config.width, config.height, config.decay_rate
        );

        Ok(Self {
            grid: LifeGrid::new(config.width, config.height),
            trail: Trail::new(config.width, config.height),
            history: Vec::new(),
            step_count: 0,
            rng,
            config,
        })
    }

    /// Reseed every cell alive with the given probability.
    pub fn randomize(&mut self, probability: f64) -> Result<(), ConfigError> {
        self.reseed(&Seed::random(probability))
    }

    /// Replace the grid from a seed.
    ///
    /// The trail becomes the float cast of the new grid and the history is
    /// cleared. Nothing changes if the seed is rejected.
    pub fn reseed(&mut self, seed: &Seed) -> Result<(), ConfigError> {
        match &seed.pattern {
            Pattern::Random { probability } => {
                check_probability(*probability)?;
                let rng = &mut self.rng;
                self.grid.fill_with(|| rng.r#gen::<f64>() < *probability);
            }
            Pattern::Cells { cells } => {
                let (width, height) = (self.config.width, self.config.height);
                if let Some(&(x, y)) = cells.iter().find(|&&(x, y)| x >= width || y >= height) {
                    return Err(ConfigError::CellOutOfBounds {
                        x,
                        y,
                        width,
                        height,
                    });
                }
                self.grid.clear();
                for &(x, y) in cells {
                    self.grid.set(x, y, true);
                }
            }
            Pattern::Void => self.grid.clear(),
        }

        self.trail.reset_from(&self.grid);
        self.history.clear();
        self.step_count = 0;

        debug!("reseeded with {} live cells", self.grid.population());
        Ok(())
    }

    /// Advance exactly one generation and record its statistics.
    pub fn step(&mut self) {
        self.grid.advance();
        self.step_count += 1;
        self.trail.decay(&self.grid, self.config.decay_rate);

        let record = HistoryRecord {
            generation: self.step_count,
            population: self.grid.population(),
            entropy: self.grid.entropy(),
        };
        trace!(
            "generation {}: population {}",
            record.generation, record.population
        );
        self.history.push(record);
    }

    /// Run for the given number of generations.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Current cell states (for rendering).
    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    /// Current trail values (for color-mapped rendering).
    pub fn display_buffer(&self) -> &Trail {
        &self.trail
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Every generation recorded since the last reseed, in order.
    pub fn get_full_history(&self) -> &[HistoryRecord] {
        &self.history
    }

    pub fn get_latest_stats(&self) -> Option<&HistoryRecord> {
        self.history.last()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
