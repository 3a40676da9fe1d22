//! Timing comparison of conversion strategies
//!
//! Both strategies run the same conversion and produce the same text. They
//! differ only in how output memory is handled, which is what the comparison
//! measures: a fresh `String` per number against one buffer reused for the
//! whole batch.

use crate::convert::{FrenchNumber, MAX};
use crate::error::Result;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::hint::black_box;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// A way of driving the conversion over a batch of numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Allocate a new `String` for every number
    Allocating,
    /// Write every number into one cleared and reused buffer
    Buffered,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Allocating, Strategy::Buffered];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Allocating => "allocating",
            Strategy::Buffered => "buffered",
        }
    }

    /// Convert every number and return the total number of bytes produced.
    pub fn run(self, numbers: &[FrenchNumber]) -> usize {
        match self {
            Strategy::Allocating => numbers
                .iter()
                .map(|n| black_box(n.to_string()).len())
                .sum(),
            Strategy::Buffered => {
                let mut buffer = String::with_capacity(128);
                let mut total = 0;
                for number in numbers {
                    buffer.clear();
                    number.write_words(&mut buffer).ok();
                    total += black_box(&buffer).len();
                }
                total
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wall-clock time taken by `strategy` to convert `numbers`
pub fn time_strategy(strategy: Strategy, numbers: &[FrenchNumber]) -> Duration {
    let start = Instant::now();
    black_box(strategy.run(black_box(numbers)));
    start.elapsed()
}

/// Column names of the CSV export, in `RoundTiming` field order
pub const CSV_HEADER: [&str; 4] = ["round", "batch_size", "allocating_secs", "buffered_secs"];

/// Timings of both strategies over one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundTiming {
    pub round: usize,
    pub batch_size: usize,
    pub allocating_secs: f64,
    pub buffered_secs: f64,
}

impl RoundTiming {
    pub fn secs(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Allocating => self.allocating_secs,
            Strategy::Buffered => self.buffered_secs,
        }
    }
}

/// Time both strategies on the same batch, allocating first.
pub fn compare_strategies(round: usize, numbers: &[FrenchNumber]) -> RoundTiming {
    let allocating = time_strategy(Strategy::Allocating, numbers);
    let buffered = time_strategy(Strategy::Buffered, numbers);

    debug!(
        "Round {}: allocating {:.6}s, buffered {:.6}s",
        round,
        allocating.as_secs_f64(),
        buffered.as_secs_f64()
    );

    RoundTiming {
        round,
        batch_size: numbers.len(),
        allocating_secs: allocating.as_secs_f64(),
        buffered_secs: buffered.as_secs_f64(),
    }
}

/// Draw `size` numbers uniformly from the supported range.
pub fn random_batch<R: Rng>(rng: &mut R, size: usize) -> Vec<FrenchNumber> {
    (0..size)
        .filter_map(|_| FrenchNumber::new(rng.random_range(0..=MAX)).ok())
        .collect()
}

/// Seeded when `seed` is given so runs can be reproduced.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Results of a full comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub started_at: DateTime<Utc>,
    pub seed: Option<u64>,
    pub rounds: Vec<RoundTiming>,
}

impl ComparisonReport {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            started_at: Utc::now(),
            seed,
            rounds: Vec::new(),
        }
    }

    /// Sum of the round timings of `strategy`, in seconds
    pub fn total(&self, strategy: Strategy) -> f64 {
        self.rounds.iter().map(|r| r.secs(strategy)).sum()
    }

    /// How much slower the allocating strategy was, as a percentage of the
    /// buffered total. `None` when the buffered total is zero.
    pub fn percentage_difference(&self) -> Option<f64> {
        let allocating = self.total(Strategy::Allocating);
        let buffered = self.total(Strategy::Buffered);
        if buffered == 0.0 {
            return None;
        }
        Some((allocating - buffered) / buffered * 100.0)
    }

    /// Write the header and one CSV row per round. The header is written even
    /// when there are no rounds.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(CSV_HEADER)?;
        for round in &self.rounds {
            csv_writer.serialize(round)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn save_csv(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_csv(file)?;
        info!("Comparison timings saved as {}", path.display());
        Ok(())
    }

    /// Human-readable summary of the totals.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Rounds: {} ({} numbers each)",
            self.rounds.len(),
            self.rounds.first().map_or(0, |r| r.batch_size)
        )?;
        for strategy in Strategy::ALL {
            writeln!(f, "{:<10} {:.6} s", strategy.name(), self.total(strategy))?;
        }
        match self.percentage_difference() {
            Some(pct) => writeln!(f, "Difference: {pct:.3}%"),
            None => writeln!(f, "Difference: n/a"),
        }
    }
}

/// Run `rounds` random batches of `batch_size` numbers through both strategies.
///
/// `on_round` is called after every round, e.g. to advance a progress bar.
pub fn run_comparison<F>(
    rounds: usize,
    batch_size: usize,
    seed: Option<u64>,
    mut on_round: F,
) -> ComparisonReport
where
    F: FnMut(&RoundTiming),
{
    let mut rng = make_rng(seed);
    let mut report = ComparisonReport::new(seed);

    info!(
        "Comparing conversion strategies over {} rounds of {} numbers",
        rounds, batch_size
    );

    for round in 1..=rounds {
        let numbers = random_batch(&mut rng, batch_size);
        let timing = compare_strategies(round, &numbers);
        on_round(&timing);
        report.rounds.push(timing);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[u32]) -> Vec<FrenchNumber> {
        values
            .iter()
            .map(|&v| FrenchNumber::new(v).unwrap())
            .collect()
    }

    fn timing(round: usize, allocating_secs: f64, buffered_secs: f64) -> RoundTiming {
        RoundTiming {
            round,
            batch_size: 4,
            allocating_secs,
            buffered_secs,
        }
    }

    #[test]
    fn test_strategies_produce_same_output_size() {
        let batch = numbers(&[0, 21, 71, 80, 200, 1001, 999999]);
        let expected: usize = batch.iter().map(|n| n.to_string().len()).sum();

        assert_eq!(Strategy::Allocating.run(&batch), expected);
        assert_eq!(Strategy::Buffered.run(&batch), expected);
    }

    #[test]
    fn test_strategies_on_empty_batch() {
        assert_eq!(Strategy::Allocating.run(&[]), 0);
        assert_eq!(Strategy::Buffered.run(&[]), 0);
    }

    #[test]
    fn test_random_batch_is_reproducible_with_seed() {
        let first = random_batch(&mut make_rng(Some(7)), 48);
        let second = random_batch(&mut make_rng(Some(7)), 48);

        assert_eq!(first.len(), 48);
        assert_eq!(first, second);
        assert!(first.iter().all(|n| n.value() <= MAX));
    }

    #[test]
    fn test_compare_strategies_records_batch() {
        let batch = numbers(&[1, 2, 3]);
        let result = compare_strategies(5, &batch);

        assert_eq!(result.round, 5);
        assert_eq!(result.batch_size, 3);
        assert!(result.allocating_secs >= 0.0);
        assert!(result.buffered_secs >= 0.0);
    }

    #[test]
    fn test_run_comparison_calls_back_each_round() {
        let mut seen = Vec::new();
        let report = run_comparison(3, 10, Some(1), |t| seen.push(t.round));

        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(report.rounds.len(), 3);
        assert_eq!(report.seed, Some(1));
        assert!(report.rounds.iter().all(|r| r.batch_size == 10));
    }

    #[test]
    fn test_totals_and_percentage_difference() {
        let mut report = ComparisonReport::new(None);
        report.rounds = vec![timing(1, 0.3, 0.1), timing(2, 0.3, 0.1)];

        assert!((report.total(Strategy::Allocating) - 0.6).abs() < 1e-9);
        assert!((report.total(Strategy::Buffered) - 0.2).abs() < 1e-9);
        let pct = report.percentage_difference().unwrap();
        assert!((pct - 200.0).abs() < 1e-6);
    }

    #[test]
    fn test_percentage_difference_without_buffered_time() {
        let report = ComparisonReport::new(None);
        assert_eq!(report.percentage_difference(), None);
        assert!(report.summary().contains("Difference: n/a"));
    }

    #[test]
    fn test_write_csv() {
        let mut report = ComparisonReport::new(None);
        report.rounds = vec![timing(1, 0.5, 0.25), timing(2, 1.0, 0.5)];

        let mut out = Vec::new();
        report.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "round,batch_size,allocating_secs,buffered_secs",
                "1,4,0.5,0.25",
                "2,4,1.0,0.5",
            ]
        );
    }

    #[test]
    fn test_write_csv_without_rounds_keeps_header() {
        let report = ComparisonReport::new(None);

        let mut out = Vec::new();
        report.write_csv(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "round,batch_size,allocating_secs,buffered_secs\n"
        );
    }

    #[test]
    fn test_summary_lists_each_strategy() {
        let mut report = ComparisonReport::new(None);
        report.rounds = vec![timing(1, 0.3, 0.1)];

        let summary = report.summary();
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines[0], "Rounds: 1 (4 numbers each)");
        assert!(lines[1].starts_with("allocating"));
        assert!(lines[2].starts_with("buffered"));
        assert_eq!(lines[3], "Difference: 200.000%");
    }

    #[test]
    fn test_save_csv() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("timings.csv");
        let mut report = ComparisonReport::new(None);
        report.rounds = vec![timing(1, 0.5, 0.25)];

        report.save_csv(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("round,batch_size,allocating_secs,buffered_secs"));
        assert_eq!(content.lines().count(), 2);
    }
}
