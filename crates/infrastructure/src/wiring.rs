//! Workflow wiring

use std::sync::Arc;

use application::{ApplicationError, LookupWorkflow};
use tracing::info;

use crate::adapters::{CepAdapter, WeatherAdapter};
use crate::config::AppConfig;

/// Build a workflow backed by the HTTP adapters described by `config`
///
/// # Errors
///
/// Returns an error if the configuration is invalid or an HTTP client cannot
/// be initialized.
pub fn build_workflow(config: &AppConfig) -> Result<LookupWorkflow, ApplicationError> {
    config.validate()?;

    let address = CepAdapter::with_config(config.cep.clone())?;
    let weather = WeatherAdapter::with_config(config.weather.clone())?;

    info!(
        cep_url = %config.cep.base_url,
        weather_url = %config.weather.base_url,
        timezone = %config.weather.timezone,
        policy = ?config.workflow.policy,
        "Workflow ready"
    );

    Ok(LookupWorkflow::new(Arc::new(address), Arc::new(weather))
        .with_policy(config.workflow.policy))
}
