//! fxform Core - amount parsing, exchange-rate tables, and conversion.
//!
//! This crate contains the converter's domain logic. It knows nothing about
//! HTTP serving; rates arrive through the `ExchangeRateProvider` trait from
//! the `fxform-rates` crate.
//!
//! ```
//! use fxform_core::amount::{normalize, validate_amount};
//!
//! assert!(validate_amount("1,00,000", "INR").is_ok());
//! assert!(validate_amount("12,3,45", "USD").is_err());
//! assert_eq!(normalize("1.5 crore").unwrap().to_string(), "15000000.00");
//! ```

pub mod amount;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod session;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
