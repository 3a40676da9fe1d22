//! CLI argument structures
//!
//! This module defines the command-line interface of `french-numbers`: the
//! top-level structure with its global flags and every subcommand.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Spell out numbers in French and time the conversion
#[derive(Parser)]
#[command(name = "french-numbers")]
#[command(about = "french-numbers - Spell out numbers from 0 to 999,999 in French", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert the given numbers to French words
    #[command(name = "convert")]
    Convert {
        /// Integers between 0 and 999999
        #[arg(required = true, allow_negative_numbers = true)]
        inputs: Vec<String>,

        /// Print the results as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Convert the configured sample numbers (default command)
    #[command(name = "samples")]
    Samples,

    /// Convert randomly drawn numbers
    #[command(name = "random")]
    Random {
        /// How many numbers to draw
        #[arg(short = 'n', long, default_value = "48")]
        count: usize,

        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Time the allocating and buffered conversion strategies against each other
    #[command(name = "compare")]
    Compare {
        /// Number of random batches
        #[arg(long)]
        rounds: Option<usize>,

        /// Numbers per batch
        #[arg(long)]
        batch_size: Option<usize>,

        /// Seed for reproducible batches
        #[arg(long)]
        seed: Option<u64>,

        /// Write per-round timings to this CSV file
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Hide the progress bar
        #[arg(short = 'q', long)]
        quiet: bool,
    },
}
