//! Application layer - Use cases and orchestration
//!
//! Defines the ports for the two external lookups and the workflow that
//! drives them in sequence. Adapters in the infrastructure layer implement
//! the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
