use fxform_rates::LatestRates;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use super::currency_converter::{convert, cross_rate};
use super::fx_errors::FxError;
use crate::utils::decimal_utils::{serialize_display_decimal, serialize_rate_decimal};

/// Rates for every known currency, each quoted against `base`.
///
/// Immutable once built. Non-positive rates are dropped on construction and
/// the base currency is always present with a rate of 1.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateTable {
    base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    source: String,
    rates: BTreeMap<String, Decimal>,
}

impl ExchangeRateTable {
    pub fn new(base: &str, rates: BTreeMap<String, Decimal>, source: &str) -> Self {
        let base = base.trim().to_uppercase();
        let mut accepted = BTreeMap::new();
        for (code, rate) in rates {
            if rate <= Decimal::ZERO {
                log::warn!("Dropping non-positive rate {} for {}", rate, code);
                continue;
            }
            accepted.insert(code.trim().to_uppercase(), rate);
        }
        accepted.entry(base.clone()).or_insert(Decimal::ONE);

        Self {
            base,
            date: None,
            source: source.to_string(),
            rates: accepted,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Rate of `code` against the base currency.
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// All currency codes, sorted.
    pub fn currencies(&self) -> Vec<String> {
        self.rates.keys().cloned().collect()
    }

    /// Codes containing `query`, ignoring case. An empty query matches all.
    pub fn search(&self, query: &str) -> Vec<String> {
        let query = query.trim().to_uppercase();
        self.rates
            .keys()
            .filter(|code| code.contains(&query))
            .cloned()
            .collect()
    }
}

impl From<LatestRates> for ExchangeRateTable {
    fn from(latest: LatestRates) -> Self {
        let mut table = ExchangeRateTable::new(&latest.base, latest.rates, &latest.source);
        table.date = latest.date.map(|d| d.to_string());
        table
    }
}

/// Outcome of one conversion, ready for display.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Normalized input amount
    #[serde(serialize_with = "serialize_display_decimal")]
    pub amount: Decimal,
    pub from_currency: String,
    pub to_currency: String,
    /// Cross rate applied (units of `to_currency` per `from_currency`)
    #[serde(serialize_with = "serialize_rate_decimal")]
    pub rate: Decimal,
    #[serde(serialize_with = "serialize_display_decimal")]
    pub converted_amount: Decimal,
}

impl ConversionResult {
    /// Converts `amount` and records the cross rate that was applied.
    pub fn compute(
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
        rates: &ExchangeRateTable,
    ) -> Result<Self, FxError> {
        let rate = cross_rate(from_currency, to_currency, rates)?;
        let converted_amount = convert(amount, from_currency, to_currency, rates)?;
        Ok(Self {
            amount,
            from_currency: from_currency.to_string(),
            to_currency: to_currency.to_string(),
            rate,
            converted_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rates(entries: &[(&str, Decimal)]) -> BTreeMap<String, Decimal> {
        entries
            .iter()
            .map(|(code, rate)| (code.to_string(), *rate))
            .collect()
    }

    #[test]
    fn test_drops_non_positive_rates() {
        let table = ExchangeRateTable::new(
            "USD",
            rates(&[
                ("USD", dec!(1)),
                ("INR", dec!(83)),
                ("XXX", dec!(0)),
                ("YYY", dec!(-2)),
            ]),
            "MANUAL",
        );
        assert_eq!(table.currencies(), vec!["INR", "USD"]);
        assert!(!table.contains("XXX"));
    }

    #[test]
    fn test_base_always_present() {
        let table = ExchangeRateTable::new("usd", rates(&[("INR", dec!(83))]), "MANUAL");
        assert_eq!(table.base(), "USD");
        assert_eq!(table.rate("USD"), Some(Decimal::ONE));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let table = ExchangeRateTable::new(
            "USD",
            rates(&[("INR", dec!(83)), ("IDR", dec!(15600)), ("EUR", dec!(0.92))]),
            "MANUAL",
        );
        assert_eq!(table.search("in"), vec!["INR"]);
        assert_eq!(table.search("I"), vec!["IDR", "INR"]);
        assert_eq!(table.search("R"), vec!["EUR", "IDR", "INR"]);
        assert_eq!(table.search("  ").len(), 4);
        assert!(table.search("zzz").is_empty());
    }

    #[test]
    fn test_from_latest_rates() {
        let latest =
            LatestRates::new("USD", rates(&[("INR", dec!(82.9))]), "EXCHANGE_RATE_API");
        let table = ExchangeRateTable::from(latest);
        assert_eq!(table.source(), "EXCHANGE_RATE_API");
        assert_eq!(table.rate("INR"), Some(dec!(82.9)));
        assert_eq!(table.date(), None);
    }

    #[test]
    fn test_conversion_result_serializes_display_strings() {
        let result = ConversionResult {
            amount: dec!(100),
            from_currency: "USD".to_string(),
            to_currency: "INR".to_string(),
            rate: dec!(83.1234567),
            converted_amount: dec!(8312.34567),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["amount"], "100.00");
        assert_eq!(json["fromCurrency"], "USD");
        assert_eq!(json["rate"], "83.123457");
        assert_eq!(json["convertedAmount"], "8312.35");
    }
}
