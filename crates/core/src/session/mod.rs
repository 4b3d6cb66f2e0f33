//! Session module - the converter form's state and its operations.

mod form_errors;
mod session_model;

pub use form_errors::FormErrors;
pub use session_model::{ConversionRequest, ConverterSession, SessionUpdate, SessionView};
