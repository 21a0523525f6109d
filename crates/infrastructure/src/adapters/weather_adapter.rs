//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{CurrentConditions, DailyForecast, DomainError, GeoLocation, Humidity, WeatherSnapshot};
use integration_weather::{
    CurrentWeather as IntegrationCurrent, DailyForecast as IntegrationDaily, Forecast,
    OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather services using Open-Meteo API
pub struct WeatherAdapter {
    client: OpenMeteoClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("base_url", &self.client.config().base_url)
            .field("timezone", &self.client.config().timezone)
            .finish_non_exhaustive()
    }
}

impl WeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::InvalidCoordinates => DomainError::InvalidCoordinates.into(),
            WeatherError::ConnectionFailed(_)
            | WeatherError::RequestFailed(_)
            | WeatherError::ParseError(_)
            | WeatherError::ServiceUnavailable(_)
            | WeatherError::RateLimitExceeded => ApplicationError::Lookup(err.to_string()),
        }
    }

    /// Convert integration current weather to domain current conditions
    fn map_current(current: &IntegrationCurrent) -> CurrentConditions {
        CurrentConditions {
            temperature: current.temperature,
            condition_code: current.weather_code,
            wind_speed: current.wind_speed,
            wind_direction: current.wind_direction,
            humidity: current.humidity.and_then(Humidity::from_reading),
            observed_at: Some(current.time),
        }
    }

    /// Convert integration daily forecast to domain daily forecast
    const fn map_daily(daily: &IntegrationDaily) -> DailyForecast {
        DailyForecast {
            date: daily.date,
            temperature_max: daily.temperature_max,
            temperature_min: daily.temperature_min,
            condition_code: daily.weather_code,
        }
    }

    fn map_forecast(forecast: Forecast) -> WeatherSnapshot {
        WeatherSnapshot {
            current: Self::map_current(&forecast.current),
            daily: forecast.daily.iter().map(Self::map_daily).collect(),
            timezone: forecast.timezone,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn get_snapshot(&self, location: &GeoLocation) -> Result<WeatherSnapshot, ApplicationError> {
        let result = self
            .client
            .get_forecast(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(forecast) => {
                debug!(
                    temperature = forecast.current.temperature,
                    days = forecast.daily.len(),
                    "Retrieved weather forecast"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather forecast");
            },
        }

        result.map(Self::map_forecast)
    }
}
