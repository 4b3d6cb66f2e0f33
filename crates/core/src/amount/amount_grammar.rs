//! Per-currency grammars for the free-form amount field.
//!
//! | Currency | Grammar | Accepts |
//! |----------|---------|---------|
//! | `INR` | [`AmountGrammar::Indian`] | `1,00,000`, `12,34,567.5`, `2 lakh`, `1.5 Crores`, `500 rupees` |
//! | `USD` | [`AmountGrammar::Western`] | `1,234,567`, `1,234.50`, `1234.5` |
//! | other | [`AmountGrammar::Plain`] | `1234` |

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::errors::ValidationError;

lazy_static! {
    /// Indian grouping: the last group has three digits, every group before
    /// it has two (the leading one may have one). An optional magnitude or
    /// unit word may follow.
    static ref INDIAN_AMOUNT_REGEX: Regex = Regex::new(
        r"(?i)^(?:[0-9]{1,2}(?:,[0-9]{2})*,[0-9]{3}|[0-9]+)(?:\.[0-9]+)?(?:\s*(?:lakhs?|crores?|rupees?))?$"
    )
    .expect("Invalid regex pattern");

    /// Western grouping: a comma every three digits.
    static ref WESTERN_AMOUNT_REGEX: Regex =
        Regex::new(r"^(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.[0-9]+)?$")
            .expect("Invalid regex pattern");

    static ref PLAIN_AMOUNT_REGEX: Regex =
        Regex::new(r"^[0-9]+$").expect("Invalid regex pattern");
}

/// The input grammar applied to the amount field, chosen by the
/// "from" currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmountGrammar {
    Indian,
    Western,
    Plain,
}

impl AmountGrammar {
    pub fn for_currency(currency: &str) -> Self {
        let currency = currency.trim();
        if currency.eq_ignore_ascii_case("INR") {
            AmountGrammar::Indian
        } else if currency.eq_ignore_ascii_case("USD") {
            AmountGrammar::Western
        } else {
            AmountGrammar::Plain
        }
    }

    /// Whether `raw` (surrounding whitespace ignored) matches this grammar.
    pub fn matches(&self, raw: &str) -> bool {
        let raw = raw.trim();
        match self {
            AmountGrammar::Indian => INDIAN_AMOUNT_REGEX.is_match(raw),
            AmountGrammar::Western => WESTERN_AMOUNT_REGEX.is_match(raw),
            AmountGrammar::Plain => PLAIN_AMOUNT_REGEX.is_match(raw),
        }
    }

    /// User-facing message shown when the amount does not match.
    pub fn message(&self) -> &'static str {
        match self {
            AmountGrammar::Indian => {
                "Invalid INR format or comma placement. The first comma comes after the first three digits from the right (for thousands), and subsequent commas appear after every two digits."
            }
            AmountGrammar::Western => {
                "Invalid USD format or comma placement. The comma should be every after 3 digits."
            }
            AmountGrammar::Plain => "Invalid currency",
        }
    }

    pub fn validate(&self, raw: &str) -> Result<(), ValidationError> {
        if self.matches(raw) {
            Ok(())
        } else {
            Err(ValidationError::InvalidAmount {
                message: self.message().to_string(),
            })
        }
    }
}

/// Validates `raw` against the grammar of `currency`.
pub fn validate_amount(raw: &str, currency: &str) -> Result<(), ValidationError> {
    AmountGrammar::for_currency(currency).validate(raw)
}
