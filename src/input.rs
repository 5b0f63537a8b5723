//! Parsing of the modulus from a single line of input.
//!
//! Deliberately narrow: decimal and `0x`-prefixed hexadecimal integer
//! literals only. No expression evaluation, no octal or binary notation,
//! no digit separators.

use rug::Integer;
use std::cmp::Ordering;
use thiserror::Error;

/// Rejections of the stdin modulus line.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum ParseModulusError {
    /// The line is empty or whitespace.
    #[error("no modulus given on stdin")]
    Empty,

    /// The line is not a decimal or 0x-prefixed hexadecimal integer literal.
    #[error("`{0}` is not a decimal or 0x-prefixed hexadecimal integer")]
    Invalid(String),

    /// The literal parsed but is zero or negative.
    #[error("modulus must be positive, got `{0}`")]
    NotPositive(String),
}

/// Parses a modulus from one line of text, trimming surrounding whitespace.
pub fn parse_modulus(line: &str) -> Result<Integer, ParseModulusError> {
    let literal = line.trim();
    if literal.is_empty() {
        return Err(ParseModulusError::Empty);
    }

    let parsed = match literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
    {
        Some(hex) => Integer::from_str_radix(hex, 16),
        None => Integer::from_str_radix(literal, 10),
    };

    let p = parsed.map_err(|_| ParseModulusError::Invalid(literal.to_string()))?;
    if p.cmp0() != Ordering::Greater {
        return Err(ParseModulusError::NotPositive(literal.to_string()));
    }
    Ok(p)
}
