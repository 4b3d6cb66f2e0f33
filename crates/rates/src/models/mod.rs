//! Rate snapshot models.

mod latest_rates;

pub use latest_rates::{CurrencyCode, LatestRates};
