//! Convert command implementation
//!
//! Converts numbers given on the command line, reporting each failure without
//! stopping at the first one.

use crate::convert::convert_str;
use anyhow::{anyhow, Result};
use serde::Serialize;
use tracing::warn;

/// Result of converting one command-line input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionOutcome {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        self.words.is_some()
    }
}

pub fn convert_inputs(inputs: &[String]) -> Vec<ConversionOutcome> {
    inputs
        .iter()
        .map(|input| match convert_str(input) {
            Ok(words) => ConversionOutcome {
                input: input.clone(),
                words: Some(words),
                error: None,
            },
            Err(e) => {
                warn!("Could not convert {:?}: {}", input, e);
                ConversionOutcome {
                    input: input.clone(),
                    words: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect()
}

/// Convert every input and print the results, failing if any input was rejected
pub fn run_convert_command(inputs: Vec<String>, json: bool) -> Result<()> {
    let outcomes = convert_inputs(&inputs);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            match (&outcome.words, &outcome.error) {
                (Some(words), _) => println!("{}: {}", outcome.input, words),
                (None, Some(error)) => eprintln!("{}: {}", outcome.input, error),
                (None, None) => {}
            }
        }
    }

    let failures = outcomes.iter().filter(|o| !o.is_success()).count();
    if failures > 0 {
        return Err(anyhow!(
            "{} of {} inputs could not be converted",
            failures,
            outcomes.len()
        ));
    }
    Ok(())
}
