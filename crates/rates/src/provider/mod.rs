//! Exchange-rate provider abstraction and implementations.

mod traits;

pub mod exchange_rate_api;

pub use traits::ExchangeRateProvider;
