//! Headless measurement harness
//!
//! Seeds one board, then runs each selected method over it for the
//! configured number of generations with two swapped buffers, timing the
//! whole loop. Final boards are compared against the first method's.

pub mod report;

pub use report::{MethodReport, RunReport};

use crate::config::Settings;
use crate::game_of_life::{load_board_from_file, Board};
use crate::registry::{EvolveFn, Registry};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub struct Harness {
    settings: Settings,
}

impl Harness {
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate().context("Invalid harness settings")?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// First generation: the configured pattern at the top-left corner, or a
    /// seeded random fill
    pub fn initial_board(&self) -> Result<Board> {
        let (height, width) = (self.settings.board.height, self.settings.board.width);

        match self.settings.seed.pattern_file {
            Some(ref path) => {
                let pattern = load_board_from_file(path)?;
                if pattern.height() > height || pattern.width() > width {
                    anyhow::bail!(
                        "Pattern {} is {}x{}, larger than the {}x{} board",
                        path.display(),
                        pattern.height(),
                        pattern.width(),
                        height,
                        width
                    );
                }
                let mut board = Board::new(height, width)?;
                board.place((0, 0), &pattern.living_cells());
                debug!(path = %path.display(), living = board.living_count(), "Loaded seed pattern");
                Ok(board)
            }
            None => {
                let mut rng = StdRng::seed_from_u64(self.settings.seed.rng_seed);
                let board = Board::random(height, width, self.settings.seed.density, &mut rng)?;
                debug!(
                    rng_seed = self.settings.seed.rng_seed,
                    density = self.settings.seed.density,
                    living = board.living_count(),
                    "Generated random seed board"
                );
                Ok(board)
            }
        }
    }

    /// Measure every selected method in `registry` starting from `initial`
    pub fn run(&self, registry: &Registry, initial: &Board) -> Result<RunReport> {
        let methods = registry
            .select(&self.settings.run.methods)
            .context("Failed to select methods")?;
        if methods.is_empty() {
            anyhow::bail!("No methods registered");
        }

        let generations = self.settings.run.generations;
        info!(
            height = initial.height(),
            width = initial.width(),
            generations,
            methods = methods.len(),
            "Starting run"
        );

        let mut baseline: Option<(&str, Board)> = None;
        let mut reports = Vec::with_capacity(methods.len());

        for method in methods.iter() {
            let (final_board, elapsed) = Self::measure(method.evolve, initial, generations)
                .with_context(|| format!("Method {} failed", method.name))?;

            let agrees = match baseline {
                Some((baseline_name, ref expected)) => {
                    let agrees = *expected == final_board;
                    if !agrees {
                        warn!(method = %method.name, baseline = %baseline_name, "Final board disagrees");
                    }
                    agrees
                }
                None => {
                    baseline = Some((method.name.as_str(), final_board.clone()));
                    true
                }
            };

            let report = MethodReport::new(&method.name, generations, elapsed, &final_board, agrees);
            info!(
                method = %method.name,
                total_ms = report.total_ms,
                avg_generation_us = report.avg_generation_us,
                "Method finished"
            );
            reports.push(report);
        }

        Ok(RunReport {
            height: initial.height(),
            width: initial.width(),
            generations,
            initial_living_cells: initial.living_count(),
            methods: reports,
            final_board: baseline.map(|(_, board)| board),
        })
    }

    /// Run `evolve` for `generations` steps from `initial` and time the loop
    pub fn measure(evolve: EvolveFn, initial: &Board, generations: usize) -> Result<(Board, Duration)> {
        let mut current = initial.clone();
        let mut next = Board::new(initial.height(), initial.width())?;
        current.ensure_same_shape(&next)?;

        let start = Instant::now();
        for _ in 0..generations {
            evolve(&current, &mut next);
            std::mem::swap(&mut current, &mut next);
        }
        Ok((current, start.elapsed()))
    }
}
