//! Command implementation modules
//!
//! Each CLI subcommand is implemented in its own module.

pub mod compare;
pub mod convert;
pub mod random;
pub mod samples;

// Re-export command execution functions
pub use compare::run_compare_command;
pub use convert::run_convert_command;
pub use random::run_random_command;
pub use samples::run_samples_command;
