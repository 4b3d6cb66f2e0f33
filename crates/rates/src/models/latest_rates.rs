use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Currency code (ISO 4217), e.g. "USD", "INR".
pub type CurrencyCode = String;

/// A snapshot of exchange rates, all quoted against `base`.
///
/// `rates[code]` is how many units of `code` one unit of `base` buys.
/// The base currency itself is normally present with a rate of 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestRates {
    pub base: CurrencyCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub rates: BTreeMap<CurrencyCode, Decimal>,
    /// Provider the snapshot came from
    pub source: String,
}

impl LatestRates {
    pub fn new(
        base: impl Into<CurrencyCode>,
        rates: BTreeMap<CurrencyCode, Decimal>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            date: None,
            rates,
            source: source.into(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_serializes_camel_case_without_missing_date() {
        let mut rates = BTreeMap::new();
        rates.insert("INR".to_string(), dec!(83));
        let snapshot = LatestRates::new("USD", rates, "MANUAL");

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["base"], "USD");
        assert_eq!(json["source"], "MANUAL");
        assert!(json.get("date").is_none());
    }
}
