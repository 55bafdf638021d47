use crate::{parse_to_integer, render_from_integer, Base, ParseError, BINARY_DISPLAY_WIDTH};
use serde::{Deserialize, Serialize};

/// One input written in every supported base.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
pub struct ConversionSummary {
    pub decimal: u64,
    /// Zero-padded to at least [`BINARY_DISPLAY_WIDTH`] digits.
    pub binary: String,
    pub octal: String,
    pub hex: String,
}

/// Parses `digits` in `base` and renders the value in all four bases.
///
/// # Errors
/// Fails with the same errors as [`parse_to_integer`].
pub fn convert_all(digits: &str, base: Base) -> Result<ConversionSummary, ParseError> {
    let value = parse_to_integer(digits, base)?.value;

    Ok(ConversionSummary {
        decimal: value,
        binary: render_from_integer(value, Base::Binary, Some(BINARY_DISPLAY_WIDTH)).digits,
        octal: render_from_integer(value, Base::Octal, None).digits,
        hex: render_from_integer(value, Base::Hexadecimal, None).digits,
    })
}
