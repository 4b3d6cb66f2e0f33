//! exchangerate-api.com provider.
//!
//! Uses the open `v4/latest/{BASE}` endpoint, which needs no API key and
//! returns every supported currency quoted against the requested base.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use crate::errors::RatesError;
use crate::models::LatestRates;
use crate::provider::ExchangeRateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "EXCHANGE_RATE_API";

/// Default endpoint; the base currency is appended as the last path segment.
pub const DEFAULT_ENDPOINT: &str = "https://api.exchangerate-api.com/v4/latest";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// API response from exchangerate-api.com
#[derive(Debug, Deserialize)]
struct LatestResponse {
    /// Present (as "error") only on failed requests
    result: Option<String>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    base: Option<String>,
    date: Option<String>,
    #[serde(default)]
    rates: HashMap<String, f64>,
}

/// HTTP provider for exchangerate-api.com.
///
/// # Example
///
/// ```ignore
/// use fxform_rates::{ExchangeRateApiProvider, ExchangeRateProvider};
///
/// let provider = ExchangeRateApiProvider::default();
/// let snapshot = provider.fetch_latest("USD").await?;
/// ```
pub struct ExchangeRateApiProvider {
    client: Client,
    endpoint: String,
}

impl Default for ExchangeRateApiProvider {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, REQUEST_TIMEOUT)
    }
}

impl ExchangeRateApiProvider {
    /// Create a provider for `endpoint` with the given request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    fn latest_url(&self, base: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), base)
    }
}

/// Parses a `latest` response body into a snapshot.
///
/// Rates that cannot be represented as a decimal are skipped.
fn parse_latest(body: &str, expected_base: &str) -> Result<LatestRates, RatesError> {
    let response: LatestResponse =
        serde_json::from_str(body).map_err(|e| RatesError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })?;

    if response.result.as_deref() == Some("error") {
        return Err(RatesError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: response
                .error_type
                .unwrap_or_else(|| "unknown error".to_string()),
        });
    }

    let base = response.base.ok_or_else(|| RatesError::InvalidResponse {
        provider: PROVIDER_ID.to_string(),
        message: "missing base currency".to_string(),
    })?;
    if !base.eq_ignore_ascii_case(expected_base) {
        return Err(RatesError::BaseMismatch {
            expected: expected_base.to_string(),
            actual: base,
        });
    }

    let mut rates = BTreeMap::new();
    for (code, value) in response.rates {
        match Decimal::try_from(value) {
            Ok(rate) => {
                rates.insert(code, rate);
            }
            Err(_) => {
                log::warn!("Skipping unrepresentable rate {} for {}", value, code);
            }
        }
    }

    let mut snapshot = LatestRates::new(base.to_uppercase(), rates, PROVIDER_ID);
    if let Some(date) = response
        .date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    {
        snapshot = snapshot.with_date(date);
    }
    Ok(snapshot)
}

#[async_trait]
impl ExchangeRateProvider for ExchangeRateApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_latest(&self, base: &str) -> Result<LatestRates, RatesError> {
        let url = self.latest_url(base);
        log::debug!("Fetching latest rates from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RatesError::from_transport(PROVIDER_ID, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RatesError::from_transport(PROVIDER_ID, e))?;

        if !status.is_success() {
            // Error payloads still carry a useful "error-type".
            return match parse_latest(&body, base) {
                Err(err @ RatesError::ProviderError { .. }) => Err(err),
                _ => Err(RatesError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("HTTP {}", status),
                }),
            };
        }

        let snapshot = parse_latest(&body, base)?;
        log::info!(
            "Fetched {} rates against {} from {}",
            snapshot.rates.len(),
            snapshot.base,
            PROVIDER_ID
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"{
        "provider": "https://www.exchangerate-api.com",
        "base": "USD",
        "date": "2024-03-01",
        "time_last_updated": 1709251201,
        "rates": { "USD": 1, "INR": 82.9, "EUR": 0.924, "JPY": 150.12 }
    }"#;

    #[test]
    fn test_provider_id() {
        let provider = ExchangeRateApiProvider::default();
        assert_eq!(provider.id(), "EXCHANGE_RATE_API");
    }

    #[test]
    fn test_latest_url_appends_base() {
        let provider = ExchangeRateApiProvider::new(
            "https://api.exchangerate-api.com/v4/latest/",
            REQUEST_TIMEOUT,
        );
        assert_eq!(
            provider.latest_url("USD"),
            "https://api.exchangerate-api.com/v4/latest/USD"
        );
    }

    #[test]
    fn test_parse_latest() {
        let snapshot = parse_latest(SAMPLE, "USD").unwrap();
        assert_eq!(snapshot.base, "USD");
        assert_eq!(snapshot.source, "EXCHANGE_RATE_API");
        assert_eq!(snapshot.date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(snapshot.rates.len(), 4);
        assert_eq!(snapshot.rates["USD"], dec!(1));
        assert_eq!(snapshot.rates["INR"], dec!(82.9));
        assert_eq!(snapshot.rates["EUR"], dec!(0.924));
    }

    #[test]
    fn test_parse_error_payload() {
        let body = r#"{ "result": "error", "error-type": "unsupported-code" }"#;
        match parse_latest(body, "XYZ") {
            Err(RatesError::ProviderError { message, .. }) => {
                assert_eq!(message, "unsupported-code")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_base_mismatch() {
        let result = parse_latest(SAMPLE, "EUR");
        assert!(matches!(result, Err(RatesError::BaseMismatch { .. })));
    }

    #[test]
    fn test_parse_malformed_body() {
        let result = parse_latest("<html>oops</html>", "USD");
        assert!(matches!(result, Err(RatesError::InvalidResponse { .. })));
    }

    #[test]
    fn test_parse_missing_base() {
        let result = parse_latest(r#"{ "rates": { "USD": 1 } }"#, "USD");
        assert!(matches!(result, Err(RatesError::InvalidResponse { .. })));
    }
}
