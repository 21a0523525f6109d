//! Domain layer for CepClima
//!
//! Contains the postal-code and weather value objects, the records produced by
//! the two lookups, the workflow state shared with the presentation layer and
//! the static weather condition table.
//! This layer has no I/O and defines the ubiquitous language.

pub mod condition;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use condition::{ConditionInfo, describe_condition};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
