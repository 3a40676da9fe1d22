//! # french-numbers
//!
//! Spell out integers from 0 to 999,999 in French, and time the conversion.
//!
//! ## Usage
//!
//! ```bash
//! french-numbers convert 71 80 999999
//! french-numbers compare --rounds 100 --batch-size 48 -o timings.csv
//! ```
//!
//! ## Modules
//!
//! - `convert` - The number-to-words conversion and its lookup tables
//! - `config` - Configuration file loading and environment overrides
//! - `timing` - Timing comparison of conversion strategies
//! - `cli` - Command-line argument parsing and command implementations
//! - `error` - Application error type
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod timing;

pub use convert::{convert, convert_str, ConversionError, FrenchNumber};
