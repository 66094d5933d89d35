//! Session - explicit state of a driving loop.
//!
//! Holds what an interactive front end keeps between runs: the current run
//! parameters, the engine being shown, and the verdict of the last finished
//! run. Pacing between generations stays with the caller.

use log::info;

use crate::schema::{AnalysisResult, ConfigError, RunConfig};

use super::{Engine, analyze};

#[derive(Debug)]
pub struct Session {
    config: RunConfig,
    engine: Engine,
    last_analysis: Option<AnalysisResult>,
}

impl Session {
    /// Create a session showing an empty (all-dead) universe.
    pub fn new(config: RunConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = Engine::from_config(config.engine.clone())?;
        Ok(Self {
            config,
            engine,
            last_analysis: None,
        })
    }

    /// Replace the parameters used by the next run.
    pub fn set_config(&mut self, config: RunConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Build a fresh engine, seed it, run `duration` generations and analyze.
    ///
    /// `observer` is called after every generation, e.g. to render a frame.
    pub fn run<F>(&mut self, mut observer: F) -> Result<&AnalysisResult, ConfigError>
    where
        F: FnMut(&Engine),
    {
        let engine_config = self.config.engine.clone();
        let mut engine = match self.config.rng_seed {
            Some(seed) => Engine::with_rng_seed(engine_config, seed)?,
            None => Engine::from_config(engine_config)?,
        };
        engine.randomize(self.config.probability)?;

        for _ in 0..self.config.duration {
            engine.step();
            observer(&engine);
        }

        let analysis = analyze(engine.get_full_history());
        info!(
            "run finished after {} generations: {}",
            engine.step_count(),
            analysis.title
        );

        self.engine = engine;
        Ok(self.last_analysis.insert(analysis))
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn last_analysis(&self) -> Option<&AnalysisResult> {
        self.last_analysis.as_ref()
    }

    /// Hand out the last verdict once, so it is not shown again.
    pub fn take_analysis(&mut self) -> Option<AnalysisResult> {
        self.last_analysis.take()
    }
}
