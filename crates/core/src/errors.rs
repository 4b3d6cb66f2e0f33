//! Core error types for fxform.

use thiserror::Error;

use crate::constants::SELECT_CURRENCY_MESSAGE;
use crate::fx::FxError;
use crate::session::FormErrors;
use fxform_rates::RatesError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the converter.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Failed to fetch exchange rates: {0}")]
    Rates(#[from] RatesError),
}

/// Validation errors for user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The amount does not match the grammar of the selected currency.
    #[error("{message}")]
    InvalidAmount { message: String },

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("Unknown magnitude word '{0}'")]
    UnknownMagnitude(String),

    #[error("Amount '{0}' is out of range")]
    OutOfRange(String),

    /// A currency selector named by the field is blank.
    #[error("{}", SELECT_CURRENCY_MESSAGE)]
    MissingField(String),

    #[error("{0}")]
    Form(FormErrors),
}

