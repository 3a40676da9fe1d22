//! Samples command implementation

use crate::config::Config;
use anyhow::{Context, Result};
use std::time::Instant;
use tracing::{debug, info};

/// Convert the configured sample list and report how long it took
pub fn run_samples_command(config: &Config) -> Result<()> {
    let numbers = config
        .sample_numbers()
        .context("Invalid sample list in configuration")?;

    let start = Instant::now();
    for number in &numbers {
        debug!("Converting number: {}", number.value());
        println!("{}: {}", number.value(), number);
    }
    let elapsed = start.elapsed();

    info!(
        "Total time taken for {} samples: {:.6} seconds",
        numbers.len(),
        elapsed.as_secs_f64()
    );
    Ok(())
}
