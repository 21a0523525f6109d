//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo forecast API (<https://open-meteo.com>).
//! Returns the current conditions plus the daily forecast for a coordinate
//! pair; no API key is required.

pub mod client;
mod models;

pub use client::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{CurrentWeather, DailyForecast, Forecast};
