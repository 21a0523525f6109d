//! CEP data models

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Address returned by the CEP service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CepAddress {
    /// CEP as echoed by the service (8 digits)
    pub cep: String,
    /// Street type (e.g. "Praça", "Rua")
    pub address_type: Option<String>,
    /// Street name without its type
    pub address_name: Option<String>,
    /// Full street address
    pub address: String,
    /// District (bairro)
    pub district: String,
    /// City
    pub city: String,
    /// State abbreviation (UF)
    pub state: String,
    /// Latitude, when provided and numeric
    pub latitude: Option<f64>,
    /// Longitude, when provided and numeric
    pub longitude: Option<f64>,
    /// Telephone area code
    pub ddd: Option<String>,
    /// IBGE municipality code
    pub city_ibge: Option<String>,
}

impl CepAddress {
    /// Latitude and longitude, only when both are present
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

// Internal API response types

/// Coordinate that the service sends either as a JSON number or as a string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawCoordinate {
    Number(f64),
    Text(String),
}

impl RawCoordinate {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.is_finite().then_some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

/// Identifier the service sends either as a number or as a string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawCode {
    Number(u64),
    Text(String),
}

impl RawCode {
    fn into_string(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    /// Error status embedded in the body (404 not found, 400 invalid)
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub address_type: Option<String>,
    #[serde(default)]
    pub address_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub lat: Option<RawCoordinate>,
    #[serde(default)]
    pub lng: Option<RawCoordinate>,
    #[serde(default)]
    pub ddd: Option<RawCode>,
    #[serde(default)]
    pub city_ibge: Option<RawCode>,
}

impl ApiResponse {
    /// Whether the body reports that the CEP does not exist or is invalid
    pub fn is_not_found(&self) -> bool {
        matches!(self.status, Some(400 | 404))
    }

    /// Convert to the public model, falling back to `requested` for the CEP
    pub fn into_address(self, requested: &str) -> CepAddress {
        let latitude = Self::coordinate("lat", self.lat.as_ref());
        let longitude = Self::coordinate("lng", self.lng.as_ref());

        CepAddress {
            cep: self
                .cep
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| requested.to_string()),
            address_type: self.address_type.filter(|s| !s.is_empty()),
            address_name: self.address_name.filter(|s| !s.is_empty()),
            address: self.address.unwrap_or_default(),
            district: self.district.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            latitude,
            longitude,
            ddd: self.ddd.map(RawCode::into_string),
            city_ibge: self.city_ibge.map(RawCode::into_string),
        }
    }

    fn coordinate(field: &'static str, raw: Option<&RawCoordinate>) -> Option<f64> {
        let raw = raw?;
        let value = raw.value();
        if value.is_none() {
            warn!(field, raw = ?raw, "Ignoring non-numeric coordinate");
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ApiResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn coordinates_accept_numbers_and_strings() {
        let response = parse(r#"{"cep": "01001000", "lat": "-23.5502784", "lng": -46.6342179}"#);
        let address = response.into_address("01001000");
        assert_eq!(address.coordinates(), Some((-23.550_278_4, -46.634_217_9)));
    }

    #[test]
    fn unparseable_coordinates_become_none() {
        let response = parse(r#"{"cep": "01001000", "lat": "", "lng": "abc"}"#);
        let address = response.into_address("01001000");
        assert_eq!(address.latitude, None);
        assert_eq!(address.longitude, None);
        assert_eq!(address.coordinates(), None);
    }

    #[test]
    fn one_missing_coordinate_means_no_coordinates() {
        let response = parse(r#"{"cep": "01001000", "lat": "-23.55"}"#);
        assert_eq!(response.into_address("01001000").coordinates(), None);
    }

    #[test]
    fn codes_accept_numbers_and_strings() {
        let response = parse(r#"{"cep": "01001000", "ddd": "11", "city_ibge": 3550308}"#);
        let address = response.into_address("01001000");
        assert_eq!(address.ddd.as_deref(), Some("11"));
        assert_eq!(address.city_ibge.as_deref(), Some("3550308"));
    }

    #[test]
    fn missing_text_fields_default_to_empty() {
        let address = parse(r#"{"city": "Brasília", "state": "DF"}"#).into_address("70000000");
        assert_eq!(address.cep, "70000000");
        assert!(address.address.is_empty());
        assert!(address.district.is_empty());
        assert_eq!(address.address_type, None);
    }

    #[test]
    fn body_status_marks_not_found() {
        assert!(parse(r#"{"status": 404, "code": "not_found"}"#).is_not_found());
        assert!(parse(r#"{"status": 400, "code": "invalid"}"#).is_not_found());
        assert!(!parse(r#"{"cep": "01001000"}"#).is_not_found());
    }
}
