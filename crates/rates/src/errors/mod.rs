//! Error types for the rates crate.

use thiserror::Error;

/// Errors that can occur while fetching an exchange-rate snapshot.
#[derive(Error, Debug)]
pub enum RatesError {
    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success status or an error payload.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The response body could not be understood.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse { provider: String, message: String },

    /// The snapshot is quoted against a different base than requested.
    #[error("Base currency mismatch: expected {expected}, got {actual}")]
    BaseMismatch { expected: String, actual: String },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl RatesError {
    /// Maps a transport error from `reqwest`, keeping timeouts distinguishable.
    pub fn from_transport(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }
}
