//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Postal code does not contain exactly eight digits once normalized
    #[error("CEP must contain 8 digits (got {digits})")]
    InvalidPostalCode {
        /// Number of digits left after stripping everything else
        digits: usize,
    },

    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}

impl DomainError {
    /// Check whether this error comes from user input validation
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidPostalCode { .. })
    }
}
