//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports over the CEP and Open-Meteo clients and
//! provides configuration loading, logging setup and workflow wiring.

pub mod adapters;
pub mod config;
pub mod telemetry;
mod wiring;

pub use adapters::*;
pub use crate::config::{AppConfig, LogFormat, LoggingConfig, WorkflowConfig};
pub use telemetry::{TelemetryError, init_logging};
pub use wiring::build_workflow;
