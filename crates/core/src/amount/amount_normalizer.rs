use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::utils::decimal_utils::round_for_display;

lazy_static! {
    /// A decimal head, optionally followed by a single word.
    static ref AMOUNT_PARTS_REGEX: Regex =
        Regex::new(r"^([0-9]+(?:\.[0-9]*)?|\.[0-9]+)\s*([A-Za-z]*)$")
            .expect("Invalid regex pattern");
}

/// Indian-numbering scale word trailing an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    /// No word, or "rupee"/"rupees"
    Unit,
    Lakh,
    Crore,
}

impl Magnitude {
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "" | "rupee" | "rupees" => Some(Magnitude::Unit),
            "lakh" | "lakhs" => Some(Magnitude::Lakh),
            "crore" | "crores" => Some(Magnitude::Crore),
            _ => None,
        }
    }

    pub fn factor(&self) -> Decimal {
        match self {
            Magnitude::Unit => Decimal::ONE,
            Magnitude::Lakh => dec!(100000),
            Magnitude::Crore => dec!(10000000),
        }
    }
}

/// Parses a free-form amount into a decimal with two fractional digits.
///
/// Grouping commas are dropped wherever they appear, so grammar checks
/// belong in [`super::validate_amount`] and run before this.
///
/// ```
/// use fxform_core::amount::normalize;
///
/// assert_eq!(normalize("1,00,000").unwrap().to_string(), "100000.00");
/// assert_eq!(normalize("2 lakh").unwrap().to_string(), "200000.00");
/// ```
pub fn normalize(raw: &str) -> Result<Decimal, ValidationError> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim();

    let captures = AMOUNT_PARTS_REGEX
        .captures(cleaned)
        .ok_or_else(|| ValidationError::NotANumber(raw.trim().to_string()))?;
    let head = &captures[1];
    let word = captures.get(2).map_or("", |m| m.as_str());

    let magnitude = Magnitude::from_word(word)
        .ok_or_else(|| ValidationError::UnknownMagnitude(word.to_string()))?;

    let value = Decimal::from_str(head.trim_end_matches('.'))
        .map_err(|_| ValidationError::OutOfRange(raw.trim().to_string()))?;
    let scaled = value
        .checked_mul(magnitude.factor())
        .ok_or_else(|| ValidationError::OutOfRange(raw.trim().to_string()))?;

    round_for_display(scaled)
        .ok_or_else(|| ValidationError::OutOfRange(raw.trim().to_string()))
}
