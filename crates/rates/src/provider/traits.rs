use async_trait::async_trait;

use crate::errors::RatesError;
use crate::models::LatestRates;

/// Trait for exchange-rate sources.
///
/// Implementations fetch a full snapshot of rates quoted against a base
/// currency. They do not retry; callers decide what a failure means.
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "EXCHANGE_RATE_API".
    fn id(&self) -> &'static str;

    /// Fetch the latest snapshot of rates quoted against `base`.
    async fn fetch_latest(&self, base: &str) -> Result<LatestRates, RatesError>;
}
