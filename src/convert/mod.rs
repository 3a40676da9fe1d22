//! French number spelling
//!
//! Turns an integer from 0 to 999,999 into its written French form, with the
//! words of compound numbers joined by hyphens ("deux-cents-vingt-et-un").
//!
//! The conversion decomposes a number into thousands, hundreds, tens and units
//! and recurses on each group. The irregular base-20 names of 71-79 and 81-99
//! are looked up directly.
//!
//! # Example
//!
//! ```
//! use french_numbers::convert::{convert, FrenchNumber};
//!
//! assert_eq!(convert(71).unwrap(), "soixante-et-onze");
//!
//! let number: FrenchNumber = "2021".parse().unwrap();
//! assert_eq!(number.to_string(), "deux-mille-vingt-et-un");
//! ```

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

mod tables;

use tables::{irregular, TENS, UNITS};

/// Largest number that can be spelled out.
pub const MAX: u32 = 999_999;

/// Reasons a value cannot be spelled out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("input must be an integer, got `{0}`")]
    InvalidInput(String),

    #[error("number out of supported range: {0} (expected 0 to {max})", max = MAX)]
    OutOfRange(String),
}

/// An integer known to lie in `0..=999_999`.
///
/// Its `Display` implementation renders the French words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrenchNumber(u32);

impl FrenchNumber {
    pub fn new(value: u32) -> Result<Self, ConversionError> {
        if value > MAX {
            return Err(ConversionError::OutOfRange(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Write the French words into `out` without allocating an intermediate string.
    pub fn write_words<W: fmt::Write + ?Sized>(self, out: &mut W) -> fmt::Result {
        write_words(self.0, out)
    }
}

impl fmt::Display for FrenchNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_words(f)
    }
}

impl TryFrom<u32> for FrenchNumber {
    type Error = ConversionError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for FrenchNumber {
    type Error = ConversionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .filter(|v| *v <= MAX)
            .map(Self)
            .ok_or_else(|| ConversionError::OutOfRange(value.to_string()))
    }
}

impl TryFrom<f64> for FrenchNumber {
    type Error = ConversionError;

    /// Accepts floats only when they hold an integral value.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(ConversionError::InvalidInput(value.to_string()));
        }
        if value < 0.0 || value > f64::from(MAX) {
            return Err(ConversionError::OutOfRange(value.to_string()));
        }
        Ok(Self(value as u32))
    }
}

impl FromStr for FrenchNumber {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(value) => Self::try_from(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(ConversionError::OutOfRange(trimmed.to_string()))
                }
                _ => Err(ConversionError::InvalidInput(trimmed.to_string())),
            },
        }
    }
}

/// Spell out `number` in French.
pub fn convert(number: i64) -> Result<String, ConversionError> {
    let result = FrenchNumber::try_from(number).map(|n| n.to_string());
    match &result {
        Ok(words) => debug!("Converted {} to {}", number, words),
        Err(e) => debug!("Rejected {}: {}", number, e),
    }
    result
}

/// Parse `input` as an integer and spell it out in French.
pub fn convert_str(input: &str) -> Result<String, ConversionError> {
    let result = input.parse::<FrenchNumber>().map(|n| n.to_string());
    match &result {
        Ok(words) => debug!("Converted {:?} to {}", input, words),
        Err(e) => debug!("Rejected {:?}: {}", input, e),
    }
    result
}

fn write_words<W: fmt::Write + ?Sized>(number: u32, out: &mut W) -> fmt::Result {
    if number <= 16 {
        return out.write_str(UNITS[number as usize]);
    }
    if let Some(word) = irregular(number) {
        return out.write_str(word);
    }

    if number < 100 {
        write_tens(number, out)
    } else if number < 1000 {
        write_hundreds(number, out)
    } else {
        write_thousands(number, out)
    }
}

fn write_tens<W: fmt::Write + ?Sized>(number: u32, out: &mut W) -> fmt::Result {
    let tens = number / 10;
    let remainder = number % 10;
    let word = TENS[(tens - 1) as usize];

    match remainder {
        0 => out.write_str(word),
        1 if (2..=6).contains(&tens) => write!(out, "{word}-et-un"),
        _ => write!(out, "{word}-{}", UNITS[remainder as usize]),
    }
}

fn write_hundreds<W: fmt::Write + ?Sized>(number: u32, out: &mut W) -> fmt::Result {
    let hundreds = number / 100;
    let remainder = number % 100;

    if hundreds == 1 {
        out.write_str("cent")?;
    } else {
        write!(out, "{}-cents", UNITS[hundreds as usize])?;
    }
    write_remainder(remainder, out)
}

fn write_thousands<W: fmt::Write + ?Sized>(number: u32, out: &mut W) -> fmt::Result {
    let thousands = number / 1000;
    let remainder = number % 1000;

    if thousands == 1 {
        out.write_str("mille")?;
    } else {
        write_words(thousands, out)?;
        out.write_str("-mille")?;
    }
    write_remainder(remainder, out)
}

// A zero remainder is dropped, never spelled "zéro".
fn write_remainder<W: fmt::Write + ?Sized>(remainder: u32, out: &mut W) -> fmt::Result {
    if remainder == 0 {
        return Ok(());
    }
    out.write_char('-')?;
    write_words(remainder, out)
}
