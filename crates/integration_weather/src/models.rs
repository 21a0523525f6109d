//! Weather data models
//!
//! Raw Open-Meteo response shapes plus the parsed forecast handed to callers.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Current conditions as reported by `current_weather`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Observation time, local to the requested timezone
    pub time: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature: f64,
    /// WMO weather code
    pub weather_code: i32,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees (0-360)
    pub wind_direction: f64,
    /// Relative humidity percentage from the matching hourly slot
    pub humidity: Option<f64>,
}

/// Forecast for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Forecast date
    pub date: NaiveDate,
    /// WMO weather code
    pub weather_code: i32,
    /// Maximum temperature in Celsius
    pub temperature_max: f64,
    /// Minimum temperature in Celsius
    pub temperature_min: f64,
}

/// Complete weather forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Current weather conditions
    pub current: CurrentWeather,
    /// Daily forecasts in date order
    pub daily: Vec<DailyForecast>,
    /// Latitude the service snapped to
    pub latitude: f64,
    /// Longitude the service snapped to
    pub longitude: f64,
    /// Timezone used for local times
    pub timezone: Option<String>,
}

// Internal API response types

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub timezone: Option<String>,
    pub current_weather: Option<CurrentWeatherData>,
    pub hourly: Option<HourlyData>,
    pub daily: Option<DailyData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentWeatherData {
    pub time: String,
    pub temperature: f64,
    pub weathercode: i32,
    pub windspeed: f64,
    #[serde(default)]
    pub winddirection: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HourlyData {
    pub time: Vec<String>,
    #[serde(default)]
    pub relativehumidity_2m: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DailyData {
    pub time: Vec<String>,
    pub weathercode: Vec<Option<i32>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
}

impl DailyData {
    /// Length of the shortest series
    pub fn complete_len(&self) -> usize {
        self.time
            .len()
            .min(self.weathercode.len())
            .min(self.temperature_2m_max.len())
            .min(self.temperature_2m_min.len())
    }
}
