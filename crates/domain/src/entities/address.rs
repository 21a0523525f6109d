//! Address record resolved from a postal code

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, PostalCode};

/// Address returned by the postal-code lookup
///
/// Immutable once received; a new submission replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// The postal code the service answered for
    pub postal_code: PostalCode,
    /// Street address (type and name, e.g. "Praça da Sé")
    pub address: String,
    /// District (bairro)
    pub district: String,
    /// City
    pub city: String,
    /// State abbreviation (UF)
    pub state: String,
    /// Coordinates, when the service provided usable ones
    pub location: Option<GeoLocation>,
    /// Telephone area code (DDD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    /// IBGE municipality code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ibge_code: Option<String>,
}

impl AddressRecord {
    /// Create a record with the mandatory fields
    #[must_use]
    pub fn new(
        postal_code: PostalCode,
        address: impl Into<String>,
        district: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        location: Option<GeoLocation>,
    ) -> Self {
        Self {
            postal_code,
            address: address.into(),
            district: district.into(),
            city: city.into(),
            state: state.into(),
            location,
            area_code: None,
            ibge_code: None,
        }
    }

    /// Attach the DDD area code
    #[must_use]
    pub fn with_area_code(mut self, area_code: impl Into<String>) -> Self {
        self.area_code = Some(area_code.into());
        self
    }

    /// Attach the IBGE municipality code
    #[must_use]
    pub fn with_ibge_code(mut self, ibge_code: impl Into<String>) -> Self {
        self.ibge_code = Some(ibge_code.into());
        self
    }

    /// One-line "street, district - city/UF" rendering, skipping empty parts
    #[must_use]
    pub fn one_line(&self) -> String {
        let street = [self.address.as_str(), self.district.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        let city = match (self.city.is_empty(), self.state.is_empty()) {
            (false, false) => format!("{}/{}", self.city, self.state),
            (false, true) => self.city.clone(),
            (true, false) => self.state.clone(),
            (true, true) => String::new(),
        };
        match (street.is_empty(), city.is_empty()) {
            (false, false) => format!("{street} - {city}"),
            (false, true) => street,
            _ => city,
        }
    }
}
