//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `CEPCLIMA_*` environment variables (`__` separates sections,
//! e.g. `CEPCLIMA_WEATHER__TIMEZONE`).

mod logging;

use std::path::Path;

use application::{ApplicationError, SubmissionPolicy};
use serde::{Deserialize, Serialize};

pub use integration_cep::CepConfig;
pub use integration_weather::WeatherConfig;
pub use logging::{LogFormat, LoggingConfig};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CEPCLIMA";

/// Workflow configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// What happens to the state when submissions overlap
    #[serde(default)]
    pub policy: SubmissionPolicy,
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Postal-code service
    #[serde(default)]
    pub cep: CepConfig,

    /// Forecast service
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Orchestrator behavior
    #[serde(default)]
    pub workflow: WorkflowConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// With `path`, that file must exist. Without it, `config.toml` in the
    /// working directory is read when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_from(path, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_from(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?;
        config.try_deserialize()
    }

    /// Check values the services would only reject at request time
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the offending key.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        for (key, url) in [
            ("cep.base_url", &self.cep.base_url),
            ("weather.base_url", &self.weather.base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ApplicationError::Configuration(format!(
                    "{key} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        if self.weather.timezone.trim().is_empty() {
            return Err(ApplicationError::Configuration(
                "weather.timezone must not be empty".to_string(),
            ));
        }

        for (key, timeout) in [
            ("cep.timeout_secs", self.cep.timeout_secs),
            ("weather.timeout_secs", self.weather.timeout_secs),
        ] {
            if timeout == Some(0) {
                return Err(ApplicationError::Configuration(format!(
                    "{key} must be positive when set"
                )));
            }
        }

        Ok(())
    }
}
