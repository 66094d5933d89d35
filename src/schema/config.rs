//! Configuration types for the engine and for a driven run.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

fn default_probability() -> f64 {
    0.15
}

fn default_duration() -> u64 {
    100
}

fn default_speed() -> u32 {
    30
}

/// Engine configuration, fixed for the lifetime of an engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Amount the trail of a dead cell fades per generation.
    /// Smaller values leave longer-lived trails.
    pub decay_rate: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            decay_rate: 0.1,
        }
    }
}

impl EngineConfig {
    pub fn new(width: usize, height: usize, decay_rate: f64) -> Self {
        Self {
            width,
            height,
            decay_rate,
        }
    }

    /// Total number of cells (width * height).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.width * self.height
    }

    /// Validate configuration parameters.
    ///
    /// A decay rate of exactly 0 is accepted: trails then never fade.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.decay_rate) {
            return Err(ConfigError::InvalidDecayRate(self.decay_rate));
        }
        Ok(())
    }
}

/// Presentation palette requested for a run. The core never interprets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Colormap {
    #[default]
    Magma,
    Viridis,
    Plasma,
    Inferno,
    Ocean,
    GistEarth,
}

impl Colormap {
    pub const ALL: [Colormap; 6] = [
        Colormap::Magma,
        Colormap::Viridis,
        Colormap::Plasma,
        Colormap::Inferno,
        Colormap::Ocean,
        Colormap::GistEarth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Colormap::Magma => "magma",
            Colormap::Viridis => "viridis",
            Colormap::Plasma => "plasma",
            Colormap::Inferno => "inferno",
            Colormap::Ocean => "ocean",
            Colormap::GistEarth => "gist_earth",
        }
    }
}

/// Parameters of one driven run: engine shape plus seeding and pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    /// Probability that a cell starts alive.
    #[serde(default = "default_probability")]
    pub probability: f64,
    /// Number of generations to run.
    #[serde(default = "default_duration")]
    pub duration: u64,
    /// Generations per second when paced by a front end.
    #[serde(default = "default_speed")]
    pub speed: u32,
    #[serde(default)]
    pub colormap: Colormap,
    /// Fixed RNG seed for reproducible runs (None = entropy).
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            probability: default_probability(),
            duration: default_duration(),
            speed: default_speed(),
            colormap: Colormap::default(),
            rng_seed: None,
        }
    }
}

impl RunConfig {
    /// Draw a random run in the ranges the interactive "run random" button uses.
    pub fn randomized<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let colormap = Colormap::ALL[rng.gen_range(0..Colormap::ALL.len())];
        Self {
            engine: EngineConfig {
                width: rng.gen_range(50..=200),
                height: rng.gen_range(50..=200),
                decay_rate: rng.gen_range(0.01..0.3),
            },
            probability: rng.gen_range(0.05..0.4),
            duration: rng.gen_range(50..300),
            speed: rng.gen_range(10..60),
            colormap,
            rng_seed: None,
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        check_probability(self.probability)?;
        if self.duration == 0 {
            return Err(ConfigError::InvalidDuration);
        }
        if self.speed == 0 {
            return Err(ConfigError::InvalidSpeed);
        }
        Ok(())
    }

    /// Delay between generations for a paced front end.
    pub fn frame_delay(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.speed.max(1) as f64)
    }
}

/// Reject probabilities outside [0, 1] (NaN included).
pub(crate) fn check_probability(probability: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability(probability))
    }
}

/// Invalid-argument errors raised at construction or reseed time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions must be non-zero (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Decay rate must lie in [0, 1] (got {0})")]
    InvalidDecayRate(f64),
    #[error("Probability must lie in [0, 1] (got {0})")]
    InvalidProbability(f64),
    #[error("Cell ({x}, {y}) lies outside the {width}x{height} grid")]
    CellOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("Run duration must be at least one generation")]
    InvalidDuration,
    #[error("Speed must be at least one generation per second")]
    InvalidSpeed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    #[test]
    fn test_default_engine_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
        assert!(RunConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let config = EngineConfig::new(0, 10, 0.1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert!(EngineConfig::new(10, 0, 0.1).validate().is_err());
    }

    #[test]
    fn test_decay_rate_bounds() {
        assert!(EngineConfig::new(4, 4, 0.0).validate().is_ok());
        assert!(EngineConfig::new(4, 4, 1.0).validate().is_ok());
        assert!(EngineConfig::new(4, 4, -0.01).validate().is_err());
        assert!(EngineConfig::new(4, 4, 1.5).validate().is_err());
        assert!(EngineConfig::new(4, 4, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_probability_bounds() {
        assert!(check_probability(0.0).is_ok());
        assert!(check_probability(1.0).is_ok());
        assert!(check_probability(-0.1).is_err());
        assert!(check_probability(1.1).is_err());
        assert!(check_probability(f64::NAN).is_err());
    }

    #[test]
    fn test_run_config_rejects_zero_speed_and_duration() {
        let mut config = RunConfig::default();
        config.speed = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpeed));

        let mut config = RunConfig::default();
        config.duration = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDuration));
    }

    #[test]
    fn test_frame_delay() {
        let mut config = RunConfig::default();
        config.speed = 4;
        assert_eq!(config.frame_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_randomized_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let config = RunConfig::randomized(&mut rng);
            assert!(config.validate().is_ok());
            assert!((50..=200).contains(&config.engine.width));
            assert!((50..=200).contains(&config.engine.height));
            assert!((0.05..0.4).contains(&config.probability));
            assert!((50..300).contains(&config.duration));
            assert!((10..60).contains(&config.speed));
            assert!((0.01..0.3).contains(&config.engine.decay_rate));
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{"duration": 12, "colormap": "gist_earth"}"#).unwrap();
        assert_eq!(config.duration, 12);
        assert_eq!(config.colormap, Colormap::GistEarth);
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(config.probability, 0.15);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let config = RunConfig {
            rng_seed: Some(42),
            ..RunConfig::default()
        };
        write!(file, "{}", serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        let loaded: RunConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(loaded, config);
    }
}
