//! Configuration management

pub mod settings;

pub use settings::{
    BoardConfig, CliOverrides, OutputConfig, OutputFormat, RunConfig, SeedConfig, Settings,
};
