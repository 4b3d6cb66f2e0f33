//! Cross-rate conversion over an [`ExchangeRateTable`].
//!
//! Every rate in the table is quoted against the same base currency, so the
//! direct rate between two quoted currencies is `rates[to] / rates[from]`.

use rust_decimal::Decimal;

use crate::fx::fx_errors::FxError;
use crate::fx::fx_model::ExchangeRateTable;
use crate::utils::decimal_utils::round_for_display;

fn lookup(code: &str, rates: &ExchangeRateTable) -> Result<Decimal, FxError> {
    let rate = rates
        .rate(code)
        .ok_or_else(|| FxError::UnsupportedCurrency(code.to_string()))?;
    if rate <= Decimal::ZERO {
        return Err(FxError::InvalidRate {
            currency: code.to_string(),
            rate,
        });
    }
    Ok(rate)
}

/// Units of `to` bought by one unit of `from`.
pub fn cross_rate(from: &str, to: &str, rates: &ExchangeRateTable) -> Result<Decimal, FxError> {
    let from_rate = lookup(from, rates)?;
    let to_rate = lookup(to, rates)?;
    if from == to {
        return Ok(Decimal::ONE);
    }

    to_rate.checked_div(from_rate).ok_or_else(|| {
        FxError::ConversionError(format!("Rate {} -> {} overflowed", from, to))
    })
}

/// Converts `amount` from `from` to `to`, rounded to two fractional digits.
pub fn convert(
    amount: Decimal,
    from: &str,
    to: &str,
    rates: &ExchangeRateTable,
) -> Result<Decimal, FxError> {
    let rate = cross_rate(from, to, rates)?;
    let converted = amount.checked_mul(rate).ok_or_else(|| {
        FxError::ConversionError(format!("{} {} is too large to convert", amount, from))
    })?;
    round_for_display(converted).ok_or_else(|| {
        FxError::ConversionError(format!("{} {} is too large to convert", amount, from))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn table() -> ExchangeRateTable {
        let mut rates = BTreeMap::new();
        rates.insert("USD".to_string(), dec!(1));
        rates.insert("INR".to_string(), dec!(83));
        rates.insert("EUR".to_string(), dec!(0.92));
        rates.insert("JPY".to_string(), dec!(150));
        ExchangeRateTable::new("USD", rates, "MANUAL")
    }

    #[test]
    fn test_convert_from_base() {
        let result = convert(dec!(100), "USD", "INR", &table()).unwrap();
        assert_eq!(result.to_string(), "8300.00");
    }

    #[test]
    fn test_convert_to_base() {
        let result = convert(dec!(8300), "INR", "USD", &table()).unwrap();
        assert_eq!(result.to_string(), "100.00");
    }

    #[test]
    fn test_cross_rate_between_non_base_currencies() {
        // 150 / 0.92 = 163.043478...
        let result = convert(dec!(10), "EUR", "JPY", &table()).unwrap();
        assert_eq!(result.to_string(), "1630.43");
    }

    #[test]
    fn test_same_currency() {
        assert_eq!(cross_rate("INR", "INR", &table()).unwrap(), Decimal::ONE);
        let result = convert(dec!(12.345), "INR", "INR", &table()).unwrap();
        assert_eq!(result.to_string(), "12.35");
    }

    #[test]
    fn test_missing_currency() {
        assert_eq!(
            convert(dec!(1), "USD", "GBP", &table()),
            Err(FxError::UnsupportedCurrency("GBP".to_string()))
        );
        assert_eq!(
            convert(dec!(1), "XYZ", "USD", &table()),
            Err(FxError::UnsupportedCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn test_result_too_large_for_cents() {
        let amount = Decimal::from_str_exact("79228162514264337593543950.00").unwrap();
        assert!(matches!(
            convert(amount, "USD", "INR", &table()),
            Err(FxError::ConversionError(_))
        ));
    }

    #[test]
    fn test_zero_amount() {
        let result = convert(Decimal::ZERO, "USD", "INR", &table()).unwrap();
        assert_eq!(result.to_string(), "0.00");
    }
}
