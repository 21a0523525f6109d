//! CEP adapter - Implements AddressLookupPort using integration_cep

use application::error::ApplicationError;
use application::ports::AddressLookupPort;
use async_trait::async_trait;
use domain::{AddressRecord, GeoLocation, PostalCode};
use integration_cep::{AwesomeApiClient, CepAddress, CepClient, CepConfig, CepError};
use tracing::{debug, instrument, warn};

/// Adapter for the AwesomeAPI postal-code service
pub struct CepAdapter {
    client: AwesomeApiClient,
}

impl std::fmt::Debug for CepAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CepAdapter")
            .field("base_url", &self.client.config().base_url)
            .finish_non_exhaustive()
    }
}

impl CepAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(CepConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: CepConfig) -> Result<Self, ApplicationError> {
        let client =
            AwesomeApiClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration CEP error to application error
    fn map_error(err: CepError) -> ApplicationError {
        match err {
            CepError::NotFound(cep) => ApplicationError::NotFound(cep),
            CepError::InvalidCep(cep) => {
                ApplicationError::Internal(format!("unnormalized CEP reached the client: {cep}"))
            },
            CepError::ConnectionFailed(_)
            | CepError::RequestFailed(_)
            | CepError::ParseError(_)
            | CepError::RateLimitExceeded
            | CepError::ServiceUnavailable(_) => ApplicationError::Lookup(err.to_string()),
        }
    }

    /// Street line, rebuilt from type and name when the service left it empty
    fn street(address: &CepAddress) -> String {
        if !address.address.is_empty() {
            return address.address.clone();
        }
        [address.address_type.as_deref(), address.address_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Coordinates as a validated location; out-of-range values are dropped
    fn location(address: &CepAddress) -> Option<GeoLocation> {
        let (lat, lng) = address.coordinates()?;
        match GeoLocation::new(lat, lng) {
            Ok(location) => Some(location),
            Err(e) => {
                warn!(cep = %address.cep, lat, lng, error = %e, "Ignoring out-of-range coordinates");
                None
            },
        }
    }

    /// Convert integration address to domain record
    fn map_address(address: CepAddress, requested: &PostalCode) -> AddressRecord {
        let postal_code = PostalCode::parse(&address.cep).unwrap_or_else(|_| {
            debug!(echoed = %address.cep, "Service echoed a malformed CEP, keeping the requested one");
            requested.clone()
        });

        let mut record = AddressRecord::new(
            postal_code,
            Self::street(&address),
            address.district.clone(),
            address.city.clone(),
            address.state.clone(),
            Self::location(&address),
        );
        if let Some(ddd) = address.ddd {
            record = record.with_area_code(ddd);
        }
        if let Some(ibge) = address.city_ibge {
            record = record.with_ibge_code(ibge);
        }
        record
    }
}

#[async_trait]
impl AddressLookupPort for CepAdapter {
    #[instrument(skip(self), fields(cep = %postal_code))]
    async fn resolve(&self, postal_code: &PostalCode) -> Result<AddressRecord, ApplicationError> {
        let result = self
            .client
            .lookup(postal_code.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(address) => {
                debug!(city = %address.city, state = %address.state, "Resolved CEP");
            },
            Err(e) => {
                debug!(error = %e, "Failed to resolve CEP");
            },
        }

        result.map(|address| Self::map_address(address, postal_code))
    }
}
