//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo forecast endpoint.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{
    ApiResponse, CurrentWeather, CurrentWeatherData, DailyData, DailyForecast, Forecast,
    HourlyData,
};

/// Hourly series requested alongside the current conditions
const HOURLY_FIELDS: &str = "temperature_2m,relativehumidity_2m,windspeed_10m";

/// Daily series requested for the forecast strip
const DAILY_FIELDS: &str = "weathercode,temperature_2m_max,temperature_2m_min";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timezone for local times and daily boundaries (default: `America/Sao_Paulo`)
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Request timeout in seconds; unset means no timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_timezone() -> String {
    "America/Sao_Paulo".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timezone: default_timezone(),
            timeout_secs: None,
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions and the daily forecast for a location
    async fn get_forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// The active configuration
    pub const fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Query parameters for a forecast request
    fn forecast_query(&self, latitude: f64, longitude: f64) -> [(&'static str, String); 6] {
        [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", self.config.timezone.clone()),
        ]
    }

    /// Parse current conditions, pulling humidity from the hourly series
    fn parse_current_weather(
        data: &CurrentWeatherData,
        hourly: Option<&HourlyData>,
    ) -> Result<CurrentWeather, WeatherError> {
        let time = Self::parse_datetime(&data.time)?;
        let humidity = hourly.and_then(|h| Self::humidity_at(h, time));

        Ok(CurrentWeather {
            time,
            temperature: data.temperature,
            weather_code: data.weathercode,
            wind_speed: data.windspeed,
            wind_direction: data.winddirection,
            humidity,
        })
    }

    /// Humidity in the hourly slot that contains `time`
    fn humidity_at(hourly: &HourlyData, time: NaiveDateTime) -> Option<f64> {
        let slot = time.with_minute(0)?.with_second(0)?;
        hourly
            .time
            .iter()
            .position(|t| Self::parse_datetime(t).is_ok_and(|parsed| parsed == slot))
            .and_then(|i| hourly.relativehumidity_2m.get(i).copied().flatten())
    }

    /// Parse daily forecasts, truncated to the shortest series
    fn parse_daily_forecasts(daily: &DailyData) -> Result<Vec<DailyForecast>, WeatherError> {
        let len = daily.complete_len();
        if len < daily.time.len() {
            debug!(
                days = daily.time.len(),
                complete = len,
                "Daily series have different lengths, truncating"
            );
        }

        let mut forecasts = Vec::with_capacity(len);
        for i in 0..len {
            let date = NaiveDate::parse_from_str(&daily.time[i], "%Y-%m-%d")
                .map_err(|e| WeatherError::ParseError(format!("Invalid date: {e}")))?;

            let (Some(weather_code), Some(temperature_max), Some(temperature_min)) = (
                daily.weathercode[i],
                daily.temperature_2m_max[i],
                daily.temperature_2m_min[i],
            ) else {
                debug!(%date, "Skipping day with missing values");
                continue;
            };

            forecasts.push(DailyForecast {
                date,
                weather_code,
                temperature_max,
                temperature_min,
            });
        }

        Ok(forecasts)
    }

    /// Parse an Open-Meteo local timestamp
    fn parse_datetime(s: &str) -> Result<NaiveDateTime, WeatherError> {
        // ISO 8601 without seconds (2024-01-15T14:00)
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
            return Ok(dt);
        }

        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(dt);
        }

        Err(WeatherError::ParseError(format!(
            "Invalid datetime format: {s}"
        )))
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = format!("{}/forecast", self.config.base_url);
        debug!(url = %url, timezone = %self.config.timezone, "Fetching weather forecast");

        let response = self
            .client
            .get(&url)
            .query(&self.forecast_query(latitude, longitude))
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let current_data = api_response.current_weather.as_ref().ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })?;

        let current = Self::parse_current_weather(current_data, api_response.hourly.as_ref())?;
        let daily = match api_response.daily.as_ref() {
            Some(daily_data) => Self::parse_daily_forecasts(daily_data)?,
            None => {
                warn!("No daily forecast data in response, keeping current conditions only");
                Vec::new()
            },
        };

        Ok(Forecast {
            current,
            daily,
            latitude: api_response.latitude,
            longitude: api_response.longitude,
            timezone: api_response.timezone,
        })
    }
}
