use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FxError {
    /// The rate table has not been fetched (or the fetch failed).
    #[error("Exchange rates are not available yet")]
    RatesUnavailable,

    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Invalid exchange rate for {currency}: {rate}")]
    InvalidRate { currency: String, rate: Decimal },

    #[error("Currency conversion error: {0}")]
    ConversionError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}
