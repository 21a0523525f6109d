//! CEP lookup error types

use thiserror::Error;

/// Errors that can occur during a CEP lookup
#[derive(Debug, Error)]
pub enum CepError {
    /// Connection to the CEP service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the CEP service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the CEP service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The service has no address for this CEP
    #[error("CEP {0} not found")]
    NotFound(String),

    /// The CEP is not exactly 8 digits
    #[error("Invalid CEP: {0}")]
    InvalidCep(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl CepError {
    /// Returns true if the service answered that the CEP does not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
