//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::cli::args::Commands;
use crate::cli::commands::*;
use crate::config::{CompareConfig, Config};
use anyhow::Result;

/// Execute a CLI command, falling back to `samples` when none was given
pub fn execute_command(command: Option<Commands>, config: &Config) -> Result<()> {
    match command {
        Some(Commands::Convert { inputs, json }) => run_convert_command(inputs, json),
        Some(Commands::Samples) | None => run_samples_command(config),
        Some(Commands::Random { count, seed }) => run_random_command(count, seed),
        Some(Commands::Compare {
            rounds,
            batch_size,
            seed,
            output,
            quiet,
        }) => {
            let settings = CompareConfig {
                rounds: rounds.unwrap_or(config.compare.rounds),
                batch_size: batch_size.unwrap_or(config.compare.batch_size),
                seed: seed.or(config.compare.seed),
                output: output.or_else(|| config.compare.output.clone()),
            };
            run_compare_command(&settings, quiet)
        }
    }
}
