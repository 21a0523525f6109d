//! Adapters implementing application ports

mod cep_adapter;
mod weather_adapter;

pub use cep_adapter::CepAdapter;
pub use weather_adapter::WeatherAdapter;
