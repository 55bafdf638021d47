use crate::{Base, Digit, ParseError};
use serde::{Deserialize, Serialize};

/// The contribution of one input digit to the decoded value.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy)]
pub struct ToDecimalStep {
    /// Digit as written, uppercased.
    pub digit: char,
    /// 0 is the rightmost (least significant) digit.
    pub position: u32,
    pub value: u8,
    pub base: Base,
    /// `value * base^position`
    pub term: u64,
}

/// A decoded digit string.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
pub struct Parsed {
    pub value: u64,
    /// One step per digit, least significant first.
    /// The terms sum to `value`.
    pub steps: Vec<ToDecimalStep>,
}

/// Decodes `digits`, written in `base`, into an integer.
///
/// Surrounding whitespace is ignored. Every remaining character must be a
/// digit of `base`; hex letters are case-insensitive.
///
/// # Errors
/// - [`ParseError::EmptyInput`] if `digits` is empty or only whitespace.
/// - [`ParseError::InvalidDigit`] on the first character, counting from the
///   right, that isn't a digit of `base`.
/// - [`ParseError::Overflow`] if the value doesn't fit in a [`u64`].
pub fn parse_to_integer(digits: &str, base: Base) -> Result<Parsed, ParseError> {
    let digits = digits.trim();
    if digits.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let decoded = digits
        .chars()
        .rev()
        .enumerate()
        .map(|(position, c)| {
            Digit::from_char(c, base).ok_or(ParseError::InvalidDigit {
                digit: c,
                position,
                base,
            })
        })
        .collect::<Result<Vec<Digit>, ParseError>>()?;

    let radix = u64::from(base.radix());
    let mut value: u64 = 0;
    let mut steps = Vec::with_capacity(decoded.len());

    for (position, digit) in decoded.into_iter().enumerate() {
        let Ok(position) = u32::try_from(position) else {
            return Err(ParseError::Overflow { base });
        };

        let term = positional_term(digit, radix, position).ok_or(ParseError::Overflow { base })?;
        value = value
            .checked_add(term)
            .ok_or(ParseError::Overflow { base })?;

        steps.push(ToDecimalStep {
            digit: digit.symbol(),
            position,
            value: digit.value(),
            base,
            term,
        });
    }

    Ok(Parsed { value, steps })
}

/// `digit * radix^position`, or [`None`] on overflow.
///
/// A zero digit contributes nothing no matter how far left it sits,
/// so leading zeros never overflow.
fn positional_term(digit: Digit, radix: u64, position: u32) -> Option<u64> {
    if digit.value() == 0 {
        return Some(0);
    }
    let place_value = radix.checked_pow(position)?;
    place_value.checked_mul(u64::from(digit.value()))
}
