//! FX (Foreign Exchange) module - rate table, conversion, and the FX service.

pub mod currency_converter;
mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;

pub use currency_converter::{convert, cross_rate};
pub use fx_errors::FxError;
pub use fx_model::{ConversionResult, ExchangeRateTable};
pub use fx_service::FxService;
pub use fx_traits::FxServiceTrait;
