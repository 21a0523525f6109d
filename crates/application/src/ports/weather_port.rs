//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use domain::{GeoLocation, WeatherSnapshot};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current conditions and the daily forecast for a location
    async fn get_snapshot(&self, location: &GeoLocation)
    -> Result<WeatherSnapshot, ApplicationError>;
}
