//! AwesomeAPI CEP integration
//!
//! Client for the AwesomeAPI postal-code service
//! (<https://cep.awesomeapi.com.br>). Resolves a Brazilian CEP to its street
//! address and, when the service knows them, its coordinates.

pub mod client;
pub mod error;
mod models;

pub use client::{AwesomeApiClient, CepClient, CepConfig};
pub use error::CepError;
pub use models::CepAddress;
