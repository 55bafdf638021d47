use crate::{
    parse_to_integer, render_from_integer, Base, FromDecimalStep, ParseError, ToDecimalStep,
    BINARY_DISPLAY_WIDTH,
};
use serde::{Deserialize, Serialize};

/// One line of a hand-worked conversion, free of any wording so the caller
/// can phrase it in any language.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
pub enum ExplanationRecord {
    /// Start of the conversion of `digits` from `base` into decimal.
    ToDecimalHeader { digits: String, base: Base },

    /// One digit's contribution to the decimal value.
    PositionalTerm(ToDecimalStep),

    /// Sum of all positional terms.
    FinalSum(u64),

    /// Start of the conversion of `value` from decimal into `base`.
    FromDecimalHeader { value: u64, base: Base },

    /// One division by the target base.
    Division(FromDecimalStep),

    /// The remainders read from the last division to the first.
    ReadRemainders(String),

    /// The binary result zero-padded to `width` digits.
    PaddedBinary { width: usize, digits: String },

    /// Source and target base are the same, so there is nothing to work out.
    AlreadyInBase { digits: String, base: Base },
}

/// Every step of converting a digit string from one base to another.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
pub struct ExplanationTrace {
    pub source: Base,
    pub target: Base,
    /// The input as given, without surrounding whitespace.
    pub input: String,
    pub value: u64,
    pub records: Vec<ExplanationRecord>,
    /// The value written in `target`.
    pub digits: String,
    /// `digits` padded to [`BINARY_DISPLAY_WIDTH`], when `target` is binary.
    pub padded: Option<String>,
}

impl ExplanationTrace {
    /// Per-digit terms of the to-decimal stage, least significant first.
    pub fn to_decimal_steps(&self) -> impl Iterator<Item = &ToDecimalStep> {
        self.records.iter().filter_map(|record| match record {
            ExplanationRecord::PositionalTerm(step) => Some(step),
            _ => None,
        })
    }

    /// Divisions of the from-decimal stage, most significant digit first.
    pub fn from_decimal_steps(&self) -> impl Iterator<Item = &FromDecimalStep> {
        self.records.iter().filter_map(|record| match record {
            ExplanationRecord::Division(step) => Some(step),
            _ => None,
        })
    }

    #[must_use]
    pub fn is_already_in_base(&self) -> bool {
        matches!(self.records.as_slice(), [ExplanationRecord::AlreadyInBase { .. }])
    }
}

/// Explains how `digits`, written in `source`, is converted into `target`.
///
/// The to-decimal stage is left out when `source` is decimal, and the
/// from-decimal stage is left out when `target` is decimal. When both bases
/// are the same the trace is a single [`ExplanationRecord::AlreadyInBase`].
///
/// # Errors
/// Fails with the same errors as [`parse_to_integer`]. The input is
/// validated even when no conversion is needed.
pub fn explain_conversion(
    digits: &str,
    source: Base,
    target: Base,
) -> Result<ExplanationTrace, ParseError> {
    let parsed = parse_to_integer(digits, source)?;
    let input = digits.trim().to_string();
    let value = parsed.value;

    let rendered = render_from_integer(value, target, None);
    let padded = (target == Base::Binary)
        .then(|| render_from_integer(value, target, Some(BINARY_DISPLAY_WIDTH)).digits);

    if source == target {
        return Ok(ExplanationTrace {
            source,
            target,
            records: vec![ExplanationRecord::AlreadyInBase {
                digits: input.clone(),
                base: source,
            }],
            input,
            value,
            digits: rendered.digits,
            padded,
        });
    }

    let mut records = Vec::new();

    if source != Base::Decimal {
        records.push(ExplanationRecord::ToDecimalHeader {
            digits: input.clone(),
            base: source,
        });
        records.extend(parsed.steps.into_iter().map(ExplanationRecord::PositionalTerm));
        records.push(ExplanationRecord::FinalSum(value));
    }

    if target != Base::Decimal {
        records.push(ExplanationRecord::FromDecimalHeader {
            value,
            base: target,
        });
        records.extend(
            rendered
                .presentation_order()
                .copied()
                .map(ExplanationRecord::Division),
        );
        records.push(ExplanationRecord::ReadRemainders(rendered.digits.clone()));

        if let Some(padded) = &padded {
            records.push(ExplanationRecord::PaddedBinary {
                width: BINARY_DISPLAY_WIDTH,
                digits: padded.clone(),
            });
        }
    }

    Ok(ExplanationTrace {
        source,
        target,
        input,
        value,
        records,
        digits: rendered.digits,
        padded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_binary_has_both_stages() {
        let trace = explain_conversion("1F", Base::Hexadecimal, Base::Binary).unwrap();
        assert_eq!(trace.value, 31);
        assert_eq!(trace.digits, "11111");
        assert_eq!(trace.padded.as_deref(), Some("00011111"));

        assert_eq!(
            trace.records.first(),
            Some(&ExplanationRecord::ToDecimalHeader {
                digits: "1F".to_string(),
                base: Base::Hexadecimal
            })
        );
        assert!(trace.records.contains(&ExplanationRecord::FinalSum(31)));
        assert!(trace.records.contains(&ExplanationRecord::FromDecimalHeader {
            value: 31,
            base: Base::Binary
        }));
        assert_eq!(
            trace.records.last(),
            Some(&ExplanationRecord::PaddedBinary {
                width: 8,
                digits: "00011111".to_string()
            })
        );
    }

    #[test]
    fn divisions_read_most_significant_first() {
        let trace = explain_conversion("255", Base::Decimal, Base::Octal).unwrap();
        let dividends: Vec<u64> = trace.from_decimal_steps().map(|s| s.dividend).collect();
        assert_eq!(dividends, [3, 31, 255]);

        let read: String = trace.from_decimal_steps().map(|s| s.remainder_digit).collect();
        assert_eq!(read, "377");
        assert_eq!(
            trace.records.last(),
            Some(&ExplanationRecord::ReadRemainders("377".to_string()))
        );
    }

    #[test]
    fn decimal_source_has_no_to_decimal_stage() {
        let trace = explain_conversion("10", Base::Decimal, Base::Hexadecimal).unwrap();
        assert_eq!(trace.to_decimal_steps().count(), 0);
        assert!(!trace
            .records
            .iter()
            .any(|r| matches!(r, ExplanationRecord::FinalSum(_))));
        assert_eq!(trace.digits, "A");
    }

    #[test]
    fn zero_reads_as_zero() {
        let trace = explain_conversion("0", Base::Octal, Base::Binary).unwrap();
        assert_eq!(trace.from_decimal_steps().count(), 0);
        assert!(trace
            .records
            .contains(&ExplanationRecord::ReadRemainders("0".to_string())));
        assert_eq!(trace.padded.as_deref(), Some("00000000"));
    }

    #[test]
    fn same_base_still_validates() {
        assert_eq!(
            explain_conversion("12", Base::Binary, Base::Binary),
            Err(ParseError::InvalidDigit {
                digit: '2',
                position: 0,
                base: Base::Binary
            })
        );
    }
}
