//! Domain entities - Records produced by the lookups and the workflow state

mod address;
mod weather;
mod workflow;

pub use address::AddressRecord;
pub use weather::{CurrentConditions, DailyForecast, WeatherSnapshot};
pub use workflow::{WorkflowPhase, WorkflowState};
