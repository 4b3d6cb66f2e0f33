use super::currency_converter::cross_rate;
use super::fx_errors::FxError;
use super::fx_model::{ConversionResult, ExchangeRateTable};
use super::fx_traits::FxServiceTrait;
use crate::errors::Result;
use async_trait::async_trait;
use fxform_rates::ExchangeRateProvider;
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock};

/// Holds the session's exchange-rate table.
///
/// The table starts out absent and is installed once by [`initialize`];
/// until then every rate lookup fails with [`FxError::RatesUnavailable`].
///
/// [`initialize`]: FxServiceTrait::initialize
#[derive(Clone)]
pub struct FxService {
    provider: Arc<dyn ExchangeRateProvider>,
    base_currency: String,
    table: Arc<RwLock<Option<Arc<ExchangeRateTable>>>>,
}

impl FxService {
    pub fn new(provider: Arc<dyn ExchangeRateProvider>, base_currency: &str) -> Self {
        Self {
            provider,
            base_currency: base_currency.trim().to_uppercase(),
            table: Arc::new(RwLock::new(None)),
        }
    }

    /// Installs an already-built table, bypassing the provider.
    pub fn with_table(self, table: ExchangeRateTable) -> Result<Self> {
        self.install(table)?;
        Ok(self)
    }

    fn install(&self, table: ExchangeRateTable) -> Result<()> {
        let mut lock = self
            .table
            .write()
            .map_err(|e| FxError::CacheError(e.to_string()))?;
        *lock = Some(Arc::new(table));
        Ok(())
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    async fn initialize(&self) -> Result<()> {
        let latest = self.provider.fetch_latest(&self.base_currency).await?;
        if latest.is_empty() {
            log::warn!(
                "Provider {} returned no rates for {}",
                self.provider.id(),
                latest.base
            );
        }
        let table = ExchangeRateTable::from(latest);

        log::info!(
            "Loaded {} exchange rates against {} from {}",
            table.len(),
            table.base(),
            table.source()
        );
        self.install(table)
    }

    fn is_loaded(&self) -> bool {
        self.table.read().map(|t| t.is_some()).unwrap_or(false)
    }

    fn base_currency(&self) -> &str {
        &self.base_currency
    }

    fn get_rate_table(&self) -> Result<Arc<ExchangeRateTable>> {
        let lock = self
            .table
            .read()
            .map_err(|e| FxError::CacheError(e.to_string()))?;
        lock.clone().ok_or_else(|| FxError::RatesUnavailable.into())
    }

    fn get_exchange_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal> {
        let table = self.get_rate_table()?;
        Ok(cross_rate(from_currency, to_currency, &table)?)
    }

    fn convert_currency(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ConversionResult> {
        let table = self.get_rate_table()?;
        Ok(ConversionResult::compute(
            amount,
            from_currency,
            to_currency,
            &table,
        )?)
    }

    fn list_currencies(&self, query: Option<&str>) -> Vec<String> {
        match self.get_rate_table() {
            Ok(table) => match query {
                Some(q) => table.search(q),
                None => table.currencies(),
            },
            Err(_) => Vec::new(),
        }
    }
}
