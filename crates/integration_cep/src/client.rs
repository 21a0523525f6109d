//! AwesomeAPI CEP client
//!
//! HTTP client for `GET {base_url}/json/{cep}`. One request per lookup, no
//! retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::CepError;
use crate::models::{ApiResponse, CepAddress};

/// CEP service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CepConfig {
    /// AwesomeAPI base URL (default: <https://cep.awesomeapi.com.br>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; unset means no timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://cep.awesomeapi.com.br".to_string()
}

impl Default for CepConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// CEP client trait for resolving postal codes
#[async_trait]
pub trait CepClient: Send + Sync {
    /// Resolve an 8-digit CEP to its address
    async fn lookup(&self, cep: &str) -> Result<CepAddress, CepError>;
}

/// AwesomeAPI HTTP client implementation
#[derive(Debug)]
pub struct AwesomeApiClient {
    client: Client,
    config: CepConfig,
}

impl AwesomeApiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: CepConfig) -> Result<Self, CepError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| CepError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, CepError> {
        Self::new(CepConfig::default())
    }

    /// The active configuration
    pub const fn config(&self) -> &CepConfig {
        &self.config
    }

    fn validate_cep(cep: &str) -> Result<(), CepError> {
        if cep.len() != 8 || !cep.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CepError::InvalidCep(cep.to_string()));
        }
        Ok(())
    }

    fn lookup_url(&self, cep: &str) -> String {
        format!("{}/json/{cep}", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CepClient for AwesomeApiClient {
    #[instrument(skip(self))]
    async fn lookup(&self, cep: &str) -> Result<CepAddress, CepError> {
        Self::validate_cep(cep)?;

        let url = self.lookup_url(cep);
        debug!(url = %url, "Looking up CEP");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CepError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::BAD_REQUEST {
            debug!(%status, "CEP service rejected the code");
            return Err(CepError::NotFound(cep.to_string()));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(CepError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(CepError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(CepError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| CepError::ParseError(e.to_string()))?;

        if api_response.is_not_found() {
            debug!(
                code = ?api_response.code,
                message = ?api_response.message,
                "CEP service reported not found"
            );
            return Err(CepError::NotFound(cep.to_string()));
        }

        let address = api_response.into_address(cep);
        debug!(city = %address.city, state = %address.state, "CEP resolved");
        Ok(address)
    }
}
