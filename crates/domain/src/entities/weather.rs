//! Weather snapshot produced by the forecast lookup

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::condition::{ConditionInfo, describe_condition};
use crate::value_objects::Humidity;

/// Conditions at observation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: f64,
    /// WMO condition code
    pub condition_code: i32,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_direction: f64,
    /// Relative humidity, when the hourly series covers the observation time
    pub humidity: Option<Humidity>,
    /// Observation time in the requested timezone
    pub observed_at: Option<NaiveDateTime>,
}

impl CurrentConditions {
    /// Description and icon for the current condition code
    #[must_use]
    pub fn condition(&self) -> ConditionInfo {
        describe_condition(self.condition_code)
    }
}

/// Forecast for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Forecast date (local to the requested timezone)
    pub date: NaiveDate,
    /// Maximum temperature in Celsius
    pub temperature_max: f64,
    /// Minimum temperature in Celsius
    pub temperature_min: f64,
    /// WMO condition code
    pub condition_code: i32,
}

impl DailyForecast {
    /// Description and icon for the day's condition code
    #[must_use]
    pub fn condition(&self) -> ConditionInfo {
        describe_condition(self.condition_code)
    }
}

/// Current conditions plus the service-provided daily forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Conditions now
    pub current: CurrentConditions,
    /// Daily forecast in date order, as many days as the service returned
    pub daily: Vec<DailyForecast>,
    /// Timezone the service used for local times
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}
