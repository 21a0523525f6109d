//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error, including rejected user input
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The postal code does not resolve to an address
    #[error("CEP {0} not found")]
    NotFound(String),

    /// Network or parse failure talking to an external service
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Input was rejected before any network call
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_validation())
    }

    /// The lookup service answered "not found"
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
