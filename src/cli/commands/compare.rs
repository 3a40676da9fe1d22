//! Compare command implementation
//!
//! Runs the strategy timing comparison with a progress bar and reports the
//! totals, optionally exporting per-round timings as CSV.

use crate::config::CompareConfig;
use crate::timing::{run_comparison, Strategy};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Run the comparison described by `settings`, with command-line flags already applied
pub fn run_compare_command(settings: &CompareConfig, quiet: bool) -> Result<()> {
    settings.validate()?;

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        create_progress_bar(settings.rounds)
    };

    let report = run_comparison(settings.rounds, settings.batch_size, settings.seed, |_| {
        pb.inc(1)
    });
    pb.finish_and_clear();

    print!("{}", report.summary());

    for strategy in Strategy::ALL {
        info!(
            "Total time taken by {} conversion after {} rounds: {:.6} seconds",
            strategy,
            report.rounds.len(),
            report.total(strategy)
        );
    }
    if let Some(pct) = report.percentage_difference() {
        info!(
            "The percentage difference between {:.6} and {:.6} is: {:.3}%",
            report.total(Strategy::Allocating),
            report.total(Strategy::Buffered),
            pct
        );
    }

    if let Some(path) = &settings.output {
        report
            .save_csv(path)
            .with_context(|| format!("Failed to write timings to {}", path.display()))?;
    }

    Ok(())
}

/// Create a progress bar for the comparison rounds
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░ "));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_comparison() {
        let settings = CompareConfig {
            rounds: 0,
            ..CompareConfig::default()
        };
        assert!(run_compare_command(&settings, true).is_err());
    }

    #[test]
    fn test_writes_csv_output() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("timings.csv");
        let settings = CompareConfig {
            rounds: 4,
            batch_size: 8,
            seed: Some(3),
            output: Some(path.clone()),
        };

        run_compare_command(&settings, true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 5);
    }
}
