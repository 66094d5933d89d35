//! Life Genesis - toroidal Game of Life with decaying trails.
//!
//! This crate evolves Conway's Game of Life (B3/S23) on a wrap-around grid,
//! keeps a fading display trail of recently live cells, records population
//! statistics every generation, and turns a finished run into a short
//! narrative verdict.
//!
//! # Architecture
//!
//! - `schema`: Configuration, seeds, history records and analysis results
//! - `compute`: The engine, the trajectory classifier and run sessions
//!
//! # Example
//!
//! ```rust
//! use life_genesis::{Engine, analyze};
//!
//! let mut engine = Engine::new(64, 64, 0.1).unwrap();
//! engine.randomize(0.15).unwrap();
//! engine.run(100);
//!
//! let verdict = analyze(engine.get_full_history());
//! println!("{}: {}", verdict.title, verdict.description);
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Engine, LifeGrid, Narrative, Session, Trail, analyze};
pub use schema::{AnalysisResult, ConfigError, EngineConfig, HistoryRecord, RunConfig, Seed};
