#![warn(clippy::all, clippy::pedantic)]

//! # baseconv-core
//! Converts non-negative integers between binary, octal, decimal and
//! hexadecimal, and explains each conversion the way it would be done by hand.
//!
//! - [`parse_to_integer`] decodes a digit string into a [`u64`].
//! - [`render_from_integer`] encodes a [`u64`] into a digit string.
//! - [`explain_conversion`] lists every intermediate step of a conversion.
//!
//! # Examples
//! ```
//! use baseconv_core::{explain_conversion, parse_to_integer, render_from_integer, Base};
//!
//! let parsed = parse_to_integer("ff", Base::Hexadecimal).unwrap();
//! assert_eq!(parsed.value, 255);
//!
//! let rendered = render_from_integer(parsed.value, Base::Octal, None);
//! assert_eq!(rendered.digits, "377");
//!
//! let trace = explain_conversion("1010", Base::Binary, Base::Decimal).unwrap();
//! assert_eq!(trace.to_decimal_steps().count(), 4);
//! ```

mod explanation;
mod parser;
mod renderer;
mod summary;


use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

pub use explanation::{explain_conversion, ExplanationRecord, ExplanationTrace};
pub use parser::{parse_to_integer, Parsed, ToDecimalStep};
pub use renderer::{render_from_integer, FromDecimalStep, Rendered};
pub use summary::{convert_all, ConversionSummary};

/// Every digit any supported base can use, ordered by value.
pub const ALPHABET: [u8; 16] = *b"0123456789ABCDEF";

/// Width binary results are zero-padded to for display.
pub const BINARY_DISPLAY_WIDTH: usize = 8;

/// A supported radix.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    /// All supported bases, smallest first.
    pub const ALL: [Base; 4] = [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal];

    /// Number of distinct digits in this base.
    #[must_use]
    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    /// The digits valid in this base: a prefix of [`ALPHABET`].
    #[must_use]
    pub fn alphabet(self) -> &'static [u8] {
        &ALPHABET[..self.radix() as usize]
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.radix())
    }
}

impl TryFrom<u32> for Base {
    type Error = ParseError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            2 => Ok(Base::Binary),
            8 => Ok(Base::Octal),
            10 => Ok(Base::Decimal),
            16 => Ok(Base::Hexadecimal),
            other => Err(ParseError::UnsupportedBase(other.to_string())),
        }
    }
}

impl FromStr for Base {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let radix = s
            .parse::<u32>()
            .map_err(|_| ParseError::UnsupportedBase(s.to_string()))?;
        Base::try_from(radix)
    }
}

/// A single character of [`ALPHABET`] together with its numeric value.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy)]
pub struct Digit {
    symbol: char,
    value: u8,
}

impl Digit {
    /// Looks up `c` in `base`'s alphabet. Hex letters match in either case.
    ///
    /// Returns [`None`] if `c` isn't a digit at all, or if its value
    /// isn't less than the radix.
    #[must_use]
    pub fn from_char(c: char, base: Base) -> Option<Self> {
        let upper = u8::try_from(c.to_ascii_uppercase()).ok()?;
        let value = base.alphabet().iter().position(|&d| d == upper)?;
        Some(Self {
            symbol: char::from(upper),
            value: u8::try_from(value).ok()?,
        })
    }

    /// Uppercase character of this digit.
    #[must_use]
    pub fn symbol(self) -> char {
        self.symbol
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.value
    }
}

/// Why a digit string couldn't be turned into a value.
#[derive(Error, Debug, Eq, PartialEq, Clone, Serialize, Deserialize)]
pub enum ParseError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Invalid digit '{digit}' at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: Base,
    },

    #[error("Unsupported base '{0}'. Supported bases are 2, 8, 10 and 16")]
    UnsupportedBase(String),

    #[error("Number is too large to convert from base {base}")]
    Overflow { base: Base },
}
