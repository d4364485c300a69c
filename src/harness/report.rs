//! Timing results of a harness run

use crate::game_of_life::Board;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of running one method for the configured number of generations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodReport {
    pub name: String,
    pub generations: usize,
    pub total_ms: f64,
    pub avg_generation_us: f64,
    pub generations_per_second: f64,
    pub final_living_cells: usize,
    /// Whether the final board equals the first method's final board
    pub agrees: bool,
}

impl MethodReport {
    pub fn new(name: &str, generations: usize, elapsed: Duration, final_board: &Board, agrees: bool) -> Self {
        let seconds = elapsed.as_secs_f64();
        let avg_generation_us = if generations > 0 {
            seconds * 1e6 / generations as f64
        } else {
            0.0
        };
        // a loop too fast to time reports no rate
        let generations_per_second = if seconds > 0.0 {
            generations as f64 / seconds
        } else {
            0.0
        };

        Self {
            name: name.to_string(),
            generations,
            total_ms: seconds * 1e3,
            avg_generation_us,
            generations_per_second,
            final_living_cells: final_board.living_count(),
            agrees,
        }
    }
}

/// Everything a run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub height: usize,
    pub width: usize,
    pub generations: usize,
    pub initial_living_cells: usize,
    pub methods: Vec<MethodReport>,
    #[serde(skip)]
    pub final_board: Option<Board>,
}

impl RunReport {
    /// True when every method produced the same final board
    pub fn all_agree(&self) -> bool {
        self.methods.iter().all(|method| method.agrees)
    }

    /// The method with the lowest total time
    pub fn fastest(&self) -> Option<&MethodReport> {
        self.methods
            .iter()
            .min_by(|a, b| a.total_ms.total_cmp(&b.total_ms))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize run report")
    }
}
