use baseconv_core::{Base, ExplanationRecord, ParseError};
use clap::ValueEnum;

/// Language every piece of user-facing text is written in.
///
/// Picked once from the command line and handed to whatever prints.
#[derive(ValueEnum, Debug, Eq, PartialEq, Clone, Copy)]
pub enum Language {
    /// English
    En,
    /// Hebrew
    He,
}

impl Language {
    pub fn results_title(self) -> &'static str {
        match self {
            Language::En => "Results:",
            Language::He => "תוצאות:",
        }
    }

    pub fn explanation_title(self) -> &'static str {
        match self {
            Language::En => "Detailed Explanation",
            Language::He => "הסבר מפורט",
        }
    }

    pub fn base_name(self, base: Base) -> &'static str {
        match (self, base) {
            (Language::En, Base::Binary) => "Binary",
            (Language::En, Base::Octal) => "Octal",
            (Language::En, Base::Decimal) => "Decimal",
            (Language::En, Base::Hexadecimal) => "Hex",
            (Language::He, Base::Binary) => "בינארי",
            (Language::He, Base::Octal) => "אוקטלי",
            (Language::He, Base::Decimal) => "עשרוני",
            (Language::He, Base::Hexadecimal) => "הקסדצימלי",
        }
    }

    /// The message shown instead of a result when the input is rejected.
    pub fn error(self, err: &ParseError) -> String {
        match (self, err) {
            (Language::En, ParseError::EmptyInput | ParseError::InvalidDigit { .. }) => {
                "Invalid number. Please check the digits for the selected base.".to_string()
            }
            (Language::He, ParseError::EmptyInput | ParseError::InvalidDigit { .. }) => {
                "מספר לא חוקי. אנא בדוק את הספרות עבור הבסיס שנבחר.".to_string()
            }
            (Language::En, ParseError::UnsupportedBase(base)) => {
                format!("Base {base} is not supported. Use 2, 8, 10 or 16.")
            }
            (Language::He, ParseError::UnsupportedBase(base)) => {
                format!("בסיס {base} אינו נתמך. יש להשתמש ב-2, 8, 10 או 16.")
            }
            (Language::En, ParseError::Overflow { .. }) => {
                "Number is too large to convert.".to_string()
            }
            (Language::He, ParseError::Overflow { .. }) => "המספר גדול מדי להמרה.".to_string(),
        }
    }

    /// One line of an explanation.
    pub fn record(self, record: &ExplanationRecord) -> String {
        match self {
            Language::En => english_record(record),
            Language::He => hebrew_record(record),
        }
    }
}

fn english_record(record: &ExplanationRecord) -> String {
    match record {
        ExplanationRecord::ToDecimalHeader { digits, base } => {
            format!("✨ Converting '{digits}' from base {base} to decimal (base 10) ✨")
        }
        ExplanationRecord::PositionalTerm(step) => format!(
            "  Digit '{}' at position {}: {} * ({}^{}) = {}",
            step.digit, step.position, step.value, step.base, step.position, step.term
        ),
        ExplanationRecord::FinalSum(sum) => format!("  Final Sum: {sum}"),
        ExplanationRecord::FromDecimalHeader { value, base } => {
            format!("✨ Converting '{value}' from decimal (base 10) to base {base} ✨")
        }
        ExplanationRecord::Division(step) => format!(
            "  {} / {} = {} with a remainder of {} ({})",
            step.dividend, step.base, step.quotient, step.remainder, step.remainder_digit
        ),
        ExplanationRecord::ReadRemainders(digits) => {
            format!("  Reading remainders from bottom to top: {digits}")
        }
        ExplanationRecord::PaddedBinary { width, digits } => {
            format!("  Padded to {width} bits: {digits}")
        }
        ExplanationRecord::AlreadyInBase { digits, base } => {
            format!("The number {digits} is already in base {base}.")
        }
    }
}

fn hebrew_record(record: &ExplanationRecord) -> String {
    match record {
        ExplanationRecord::ToDecimalHeader { digits, base } => {
            format!("✨ המרת '{digits}' מבסיס {base} לבסיס עשרוני (10) ✨")
        }
        ExplanationRecord::PositionalTerm(step) => format!(
            "  הספרה '{}' במיקום {}: {} * ({}^{}) = {}",
            step.digit, step.position, step.value, step.base, step.position, step.term
        ),
        ExplanationRecord::FinalSum(sum) => format!("  סיכום סופי: {sum}"),
        ExplanationRecord::FromDecimalHeader { value, base } => {
            format!("✨ המרת '{value}' מבסיס עשרוני (10) לבסיס {base} ✨")
        }
        ExplanationRecord::Division(step) => format!(
            "  {} / {} = {} עם שארית {} ({})",
            step.dividend, step.base, step.quotient, step.remainder, step.remainder_digit
        ),
        ExplanationRecord::ReadRemainders(digits) => {
            format!("  קריאת השאריות מלמטה למעלה: {digits}")
        }
        ExplanationRecord::PaddedBinary { width, digits } => {
            format!("  מרופד ל-{width} ביטים: {digits}")
        }
        ExplanationRecord::AlreadyInBase { digits, base } => {
            format!("המספר {digits} כבר נמצא בבסיס {base}.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseconv_core::explain_conversion;

    fn lines(lang: Language, digits: &str, source: Base, target: Base) -> Vec<String> {
        explain_conversion(digits, source, target)
            .unwrap()
            .records
            .iter()
            .map(|record| lang.record(record))
            .collect()
    }

    #[test]
    fn english_binary_to_hex() {
        assert_eq!(
            lines(Language::En, "1010", Base::Binary, Base::Hexadecimal),
            [
                "✨ Converting '1010' from base 2 to decimal (base 10) ✨",
                "  Digit '0' at position 0: 0 * (2^0) = 0",
                "  Digit '1' at position 1: 1 * (2^1) = 2",
                "  Digit '0' at position 2: 0 * (2^2) = 0",
                "  Digit '1' at position 3: 1 * (2^3) = 8",
                "  Final Sum: 10",
                "✨ Converting '10' from decimal (base 10) to base 16 ✨",
                "  10 / 16 = 0 with a remainder of 10 (A)",
                "  Reading remainders from bottom to top: A",
            ]
        );
    }

    #[test]
    fn english_decimal_to_binary() {
        assert_eq!(
            lines(Language::En, "6", Base::Decimal, Base::Binary),
            [
                "✨ Converting '6' from decimal (base 10) to base 2 ✨",
                "  1 / 2 = 0 with a remainder of 1 (1)",
                "  3 / 2 = 1 with a remainder of 1 (1)",
                "  6 / 2 = 3 with a remainder of 0 (0)",
                "  Reading remainders from bottom to top: 110",
                "  Padded to 8 bits: 00000110",
            ]
        );
    }

    #[test]
    fn hebrew_already_in_base() {
        assert_eq!(
            lines(Language::He, "17", Base::Octal, Base::Octal),
            ["המספר 17 כבר נמצא בבסיס 8."]
        );
    }

    #[test]
    fn errors_are_localized() {
        assert_eq!(
            Language::En.error(&ParseError::EmptyInput),
            "Invalid number. Please check the digits for the selected base."
        );
        assert_eq!(
            Language::He.error(&ParseError::UnsupportedBase("7".to_string())),
            "בסיס 7 אינו נתמך. יש להשתמש ב-2, 8, 10 או 16."
        );
    }
}
