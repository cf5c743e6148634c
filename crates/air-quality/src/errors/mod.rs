//! Error types for the air quality crate.

use thiserror::Error;

/// Errors that can occur while fetching air quality data.
///
/// None of these are retried; the caller reports a generic failure and the
/// detail is only logged.
#[derive(Error, Debug)]
pub enum AirQualityError {
    /// No API key was configured for the provider.
    #[error("Missing API key: {provider}")]
    MissingApiKey {
        /// The provider that needs a key
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("Provider error: {provider} - HTTP {status}: {body}")]
    UpstreamStatus {
        /// The provider that returned the error
        provider: String,
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The provider's response body was not valid JSON.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that sent the body
        provider: String,
        /// Decoder message
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl AirQualityError {
    /// HTTP status reported by the provider, if it got that far.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
