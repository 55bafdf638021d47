use crate::{Base, ALPHABET};
use serde::{Deserialize, Serialize};

/// One division performed while encoding a value.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy)]
pub struct FromDecimalStep {
    pub dividend: u64,
    pub base: Base,
    pub quotient: u64,
    pub remainder: u64,
    /// `remainder` as a digit of `base`.
    pub remainder_digit: char,
}

/// An encoded value.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
pub struct Rendered {
    /// Most significant digit first.
    pub digits: String,
    /// Divisions in the order they were performed, so the first step
    /// yields the least significant digit.
    pub steps: Vec<FromDecimalStep>,
}

impl Rendered {
    /// Divisions ordered so their remainders read as the digit string,
    /// most significant first.
    pub fn presentation_order(&self) -> impl DoubleEndedIterator<Item = &FromDecimalStep> {
        self.steps.iter().rev()
    }
}

/// Encodes `value` in `base`, uppercase, most significant digit first.
///
/// Zero renders as `"0"`. If `min_width` is given and `base` is binary,
/// the result is left-padded with `'0'` to at least that many digits.
/// Other bases are never padded.
#[must_use]
pub fn render_from_integer(value: u64, base: Base, min_width: Option<usize>) -> Rendered {
    let radix = u64::from(base.radix());
    let mut steps = Vec::new();
    let mut remainders = Vec::<u8>::new();

    let mut dividend = value;
    while dividend != 0 {
        let quotient = dividend / radix;
        let remainder = dividend % radix;
        let symbol = remainder_symbol(remainder);

        steps.push(FromDecimalStep {
            dividend,
            base,
            quotient,
            remainder,
            remainder_digit: char::from(symbol),
        });
        remainders.push(symbol);
        dividend = quotient;
    }

    remainders.reverse();

    if remainders.is_empty() {
        remainders.push(b'0');
    }

    let mut digits: String = remainders.into_iter().map(char::from).collect();

    if let (Some(width), Base::Binary) = (min_width, base) {
        digits = format!("{digits:0>width$}");
    }

    Rendered { digits, steps }
}

/// A remainder is always smaller than the radix, so it always has a symbol.
fn remainder_symbol(remainder: u64) -> u8 {
    usize::try_from(remainder)
        .ok()
        .and_then(|i| ALPHABET.get(i).copied())
        .unwrap_or(b'?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_in_division_order() {
        let rendered = render_from_integer(6, Base::Binary, None);
        assert_eq!(rendered.digits, "110");

        let dividends: Vec<u64> = rendered.steps.iter().map(|s| s.dividend).collect();
        assert_eq!(dividends, [6, 3, 1]);

        let read: String = rendered
            .presentation_order()
            .map(|s| s.remainder_digit)
            .collect();
        assert_eq!(read, rendered.digits);
    }

    #[test]
    fn zero_has_no_steps() {
        let rendered = render_from_integer(0, Base::Hexadecimal, None);
        assert_eq!(rendered.digits, "0");
        assert!(rendered.steps.is_empty());
    }

    #[test]
    fn padding_only_applies_to_binary() {
        assert_eq!(render_from_integer(5, Base::Binary, Some(8)).digits, "00000101");
        assert_eq!(render_from_integer(5, Base::Octal, Some(8)).digits, "5");
        assert_eq!(render_from_integer(5, Base::Hexadecimal, Some(8)).digits, "5");
    }

    #[test]
    fn padding_never_truncates() {
        assert_eq!(render_from_integer(511, Base::Binary, Some(8)).digits, "111111111");
    }

    #[test]
    fn zero_width_is_a_no_op() {
        assert_eq!(render_from_integer(5, Base::Binary, Some(0)).digits, "101");
        assert_eq!(render_from_integer(0, Base::Binary, Some(0)).digits, "0");
    }

    #[test]
    fn hex_is_uppercase() {
        assert_eq!(render_from_integer(0xBEEF, Base::Hexadecimal, None).digits, "BEEF");
    }

    #[test]
    fn u64_max() {
        let rendered = render_from_integer(u64::MAX, Base::Binary, None);
        assert_eq!(rendered.digits.len(), 64);
        assert!(rendered.digits.chars().all(|c| c == '1'));
    }
}
