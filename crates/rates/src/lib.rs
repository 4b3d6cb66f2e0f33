//! fxform rates crate
//!
//! Provider-agnostic fetching of "latest" exchange-rate snapshots.
//!
//! A provider returns a [`LatestRates`] snapshot: every rate is expressed
//! against a single base currency, so the cross rate between two quoted
//! currencies is `rates[to] / rates[from]`.
//!
//! ```text
//! +------------------------+        +---------------+
//! | ExchangeRateProvider   |  --->  |  LatestRates  |
//! | (exchangerate-api ...) |        |  base + rates |
//! +------------------------+        +---------------+
//! ```

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::RatesError;
pub use models::{CurrencyCode, LatestRates};
pub use provider::exchange_rate_api::ExchangeRateApiProvider;
pub use provider::ExchangeRateProvider;
