//! Run configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    pub seed: SeedConfig,
    pub run: RunConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

/// How the first generation is produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Probability that a random cell starts alive
    pub density: f64,
    pub rng_seed: u64,
    /// Pattern stamped at the top-left corner instead of a random fill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub generations: usize,
    /// Methods to measure, in report order. Empty means all registered.
    #[serde(default)]
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_board: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig {
                height: 64,
                width: 64,
            },
            seed: SeedConfig {
                density: 0.3,
                rng_seed: 42,
                pattern_file: None,
            },
            run: RunConfig {
                generations: 100,
                methods: Vec::new(),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_board: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.board.height == 0 || self.board.width == 0 {
            anyhow::bail!(
                "Board dimensions must be positive, got {}x{}",
                self.board.height,
                self.board.width
            );
        }

        if self.run.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if !(0.0..=1.0).contains(&self.seed.density) {
            anyhow::bail!("Seed density must be between 0 and 1, got {}", self.seed.density);
        }

        if let Some(ref pattern_file) = self.seed.pattern_file {
            if !pattern_file.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern_file.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(height) = cli_overrides.height {
            self.board.height = height;
        }
        if let Some(width) = cli_overrides.width {
            self.board.width = width;
        }
        if let Some(generations) = cli_overrides.generations {
            self.run.generations = generations;
        }
        if let Some(rng_seed) = cli_overrides.rng_seed {
            self.seed.rng_seed = rng_seed;
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.seed.pattern_file = Some(pattern_file.clone());
        }
        if !cli_overrides.methods.is_empty() {
            self.run.methods = cli_overrides.methods.clone();
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub height: Option<usize>,
    pub width: Option<usize>,
    pub generations: Option<usize>,
    pub rng_seed: Option<u64>,
    pub pattern_file: Option<PathBuf>,
    pub methods: Vec<String>,
    pub format: Option<OutputFormat>,
}
