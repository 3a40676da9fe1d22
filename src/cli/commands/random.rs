//! Random command implementation

use crate::timing::{make_rng, random_batch};
use anyhow::Result;
use tracing::debug;

/// Convert `count` numbers drawn uniformly from the supported range
pub fn run_random_command(count: usize, seed: Option<u64>) -> Result<()> {
    debug!("Drawing {} random numbers (seed: {:?})", count, seed);

    let mut rng = make_rng(seed);
    for number in random_batch(&mut rng, count) {
        println!("{}: {}", number.value(), number);
    }
    Ok(())
}
