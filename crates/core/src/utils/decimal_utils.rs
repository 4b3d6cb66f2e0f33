use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::Error as _;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, RATE_DECIMAL_PRECISION};

/// Rounds to the display precision and pads so the value always carries
/// exactly two fractional digits (`8300` becomes `8300.00`).
///
/// Returns `None` when the value has too many integer digits to carry two
/// fractional digits.
pub fn round_for_display(value: Decimal) -> Option<Decimal> {
    let mut rounded = value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(DISPLAY_DECIMAL_PRECISION);
    (rounded.scale() == DISPLAY_DECIMAL_PRECISION).then_some(rounded)
}

/// Serializes a display amount as a string with two fractional digits.
pub fn serialize_display_decimal<S>(decimal: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let rounded = round_for_display(*decimal).ok_or_else(|| {
        S::Error::custom(format!("{} cannot be shown with two decimals", decimal))
    })?;
    serializer.serialize_str(&rounded.to_string())
}

/// Serializes an exchange rate as a string rounded to six digits.
pub fn serialize_rate_decimal<S>(decimal: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let rounded = decimal.round_dp(RATE_DECIMAL_PRECISION);
    serializer.serialize_str(&rounded.normalize().to_string())
}
