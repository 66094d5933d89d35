//! Compute module - Life evolution and run classification.

mod classifier;
mod engine;
mod grid;
mod session;
mod trail;

pub use classifier::*;
pub use engine::*;
pub use grid::*;
pub use session::*;
pub use trail::*;
