//! Brazilian postal code (CEP) value object
//!
//! User input is normalized by dropping every character that is not an ASCII
//! digit. The result is only accepted when exactly eight digits remain.
//!
//! # Examples
//!
//! ```
//! use domain::PostalCode;
//!
//! let cep = PostalCode::parse("01001-000").unwrap();
//! assert_eq!(cep.as_str(), "01001000");
//! assert_eq!(cep.formatted(), "01001-000");
//!
//! assert!(PostalCode::parse("0100-100").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A normalized eight-digit CEP
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Number of digits in a CEP
    pub const LENGTH: usize = 8;

    /// Strip every non-digit character from raw input
    ///
    /// ```
    /// use domain::PostalCode;
    ///
    /// assert_eq!(PostalCode::normalize(" 01.001-000 "), "01001000");
    /// assert_eq!(PostalCode::normalize("abc"), "");
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).collect()
    }

    /// Normalize and validate raw user input
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPostalCode` when the normalized input does
    /// not have exactly eight digits.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let digits = Self::normalize(raw);
        if digits.len() != Self::LENGTH {
            return Err(DomainError::InvalidPostalCode {
                digits: digits.len(),
            });
        }
        Ok(Self(digits))
    }

    /// The eight digits, without punctuation
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Conventional `NNNNN-NNN` rendering
    #[must_use]
    pub fn formatted(&self) -> String {
        let (prefix, suffix) = self.0.split_at(5);
        format!("{prefix}-{suffix}")
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for PostalCode {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for PostalCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Deserialization goes through the same normalization as user input
impl<'de> Deserialize<'de> for PostalCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_digits_are_kept() {
        let cep = PostalCode::parse("01001000").unwrap();
        assert_eq!(cep.as_str(), "01001000");
    }

    #[test]
    fn hyphenated_input_is_normalized() {
        let cep = PostalCode::parse("01001-000").unwrap();
        assert_eq!(cep.as_str(), "01001000");
    }

    #[test]
    fn surrounding_noise_is_stripped() {
        let cep = PostalCode::parse("  CEP: 20040-002\n").unwrap();
        assert_eq!(cep.as_str(), "20040002");
    }

    #[test]
    fn too_few_digits_rejected() {
        let err = PostalCode::parse("0100100").unwrap_err();
        assert_eq!(err, DomainError::InvalidPostalCode { digits: 7 });
    }

    #[test]
    fn too_many_digits_rejected() {
        let err = PostalCode::parse("010010001").unwrap_err();
        assert_eq!(err, DomainError::InvalidPostalCode { digits: 9 });
    }

    #[test]
    fn empty_input_rejected() {
        let err = PostalCode::parse("").unwrap_err();
        assert_eq!(err, DomainError::InvalidPostalCode { digits: 0 });
    }

    #[test]
    fn non_ascii_digits_are_not_counted() {
        // Arabic-Indic digits are not CEP digits
        assert!(PostalCode::parse("٠١٠٠١٠٠٠").is_err());
    }

    #[test]
    fn formatted_inserts_hyphen() {
        let cep = PostalCode::parse("01001000").unwrap();
        assert_eq!(cep.formatted(), "01001-000");
        assert_eq!(cep.to_string(), "01001000");
    }

    #[test]
    fn deserialization_normalizes() {
        let cep: PostalCode = serde_json::from_str("\"01001-000\"").unwrap();
        assert_eq!(cep.as_str(), "01001000");
        assert_eq!(serde_json::to_string(&cep).unwrap(), "\"01001000\"");
    }

    #[test]
    fn deserialization_rejects_short_code() {
        let result: Result<PostalCode, _> = serde_json::from_str("\"123\"");
        assert!(result.is_err());
    }
}
