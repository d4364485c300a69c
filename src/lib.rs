//! Toroidal Game of Life
//!
//! Computes B3/S23 generations on fixed-size boards that wrap around on both
//! axes, with several interchangeable evolve implementations and a headless
//! harness that times them against each other.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod harness;
pub mod registry;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::{Board, GameOfLifeRules};
pub use harness::{Harness, RunReport};
pub use registry::{EvolveFn, Registry};

use anyhow::Result;

/// Seed a board from `settings` and time every selected built-in method on it
pub fn run_benchmark(settings: Settings) -> Result<RunReport> {
    let harness = Harness::new(settings)?;
    let initial = harness.initial_board()?;
    harness.run(&Registry::with_builtin(), &initial)
}
