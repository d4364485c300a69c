//! Command line front end: headless benchmark and single-pattern stepping

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use toroidal_life::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_patterns, load_board_from_file, GameOfLifeRules},
    harness::Harness,
    registry::Registry,
    utils::{ColorOutput, ReportFormatter},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(about = "Toroidal Game of Life evolve benchmark")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Time every registered method on the same seed board
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Board width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Random seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Seed pattern file (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Methods to run, repeatable (overrides config)
        #[arg(short, long = "method")]
        methods: Vec<String>,

        /// Report format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },

    /// Evolve a pattern file and print each generation
    Step {
        /// Pattern file
        pattern: PathBuf,

        /// Number of generations
        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// Method to evolve with
        #[arg(short, long, default_value = "bordered")]
        method: String,

        /// Print every intermediate generation, not just the last
        #[arg(long)]
        show_all: bool,
    },

    /// List registered methods
    List,

    /// Create a default configuration and example patterns
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = Registry::with_builtin();

    match cli.command {
        Commands::Run {
            config,
            height,
            width,
            generations,
            seed,
            pattern,
            methods,
            format,
        } => {
            let overrides = CliOverrides {
                height,
                width,
                generations,
                rng_seed: seed,
                pattern_file: pattern,
                methods,
                format: format.map(OutputFormat::from),
            };
            run_command(&registry, &config, &overrides)
        }
        Commands::Step {
            pattern,
            generations,
            method,
            show_all,
        } => step_command(&registry, &pattern, generations, &method, show_all),
        Commands::List => {
            list_command(&registry);
            Ok(())
        }
        Commands::Setup { directory, force } => setup_command(&directory, force),
    }
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        eprintln!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(registry: &Registry, config_path: &Path, overrides: &CliOverrides) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);

    let format = settings.output.format;
    let show_board = settings.output.show_board;

    let harness = Harness::new(settings).context("Configuration validation failed")?;
    let initial = harness.initial_board().context("Failed to seed board")?;
    let report = harness.run(registry, &initial).context("Run failed")?;

    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => {
            println!("{}", ReportFormatter::format_report(&report));
            if show_board {
                if let Some(ref board) = report.final_board {
                    println!("Final board:");
                    println!("{}", ReportFormatter::format_board_compact(board));
                }
            }
            if report.all_agree() {
                println!("{}", ColorOutput::success("All methods agree"));
            } else {
                println!("{}", ColorOutput::error("Methods disagree on the final board"));
            }
        }
    }

    if !report.all_agree() {
        anyhow::bail!("Methods produced different final boards");
    }
    Ok(())
}

fn step_command(
    registry: &Registry,
    pattern_path: &Path,
    generations: usize,
    method_name: &str,
    show_all: bool,
) -> Result<()> {
    let method = registry.require(method_name)?;
    let board = load_board_from_file(pattern_path)?;
    info!(method = %method.name, generations, "Stepping pattern");

    println!("Generation 0:");
    println!("{}", ReportFormatter::format_board_with_coords(&board));

    if show_all {
        let mut current = board;
        for generation in 1..=generations {
            current = GameOfLifeRules::evolve_generations(&current, 1, method.evolve);
            println!("Generation {} (living: {}):", generation, current.living_count());
            println!("{}", ReportFormatter::format_board_with_coords(&current));
        }
    } else if generations > 0 {
        let last = GameOfLifeRules::evolve_generations(&board, generations, method.evolve);
        println!("Generation {} (living: {}):", generations, last.living_count());
        println!("{}", ReportFormatter::format_board_with_coords(&last));
    }

    Ok(())
}

fn list_command(registry: &Registry) {
    println!("{}", ColorOutput::info("Registered methods:"));
    for name in registry.names() {
        println!("  {}", name);
    }
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    let config_dir = directory.join("config");
    let pattern_dir = directory.join("patterns");

    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&pattern_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    let mut glider_config = Settings::default();
    glider_config.board.height = 32;
    glider_config.board.width = 32;
    glider_config.run.generations = 128;
    glider_config.seed.pattern_file = Some(pattern_dir.join("glider.txt"));
    glider_config.output.show_board = true;
    glider_config.to_file(config_dir.join("glider.yaml"))?;

    println!("\n{}", ColorOutput::success("Setup complete"));
    println!("Run: toroidal_life run --config {}", config_path.display());

    Ok(())
}
