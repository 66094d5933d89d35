//! Schema module - Configuration, seeding and record types for Life runs.

mod config;
mod record;
mod seed;

pub use config::*;
pub use record::*;
pub use seed::*;
