use super::fx_model::{ConversionResult, ExchangeRateTable};
use crate::errors::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Trait defining the contract for FX service operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    /// Fetches the rate table from the provider and installs it.
    async fn initialize(&self) -> Result<()>;

    fn is_loaded(&self) -> bool;
    fn base_currency(&self) -> &str;
    fn get_rate_table(&self) -> Result<Arc<ExchangeRateTable>>;
    fn get_exchange_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal>;
    fn convert_currency(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ConversionResult>;
    fn list_currencies(&self, query: Option<&str>) -> Vec<String>;
}
