//! Lookup workflow state
//!
//! `WorkflowState` is what the presentation layer renders. Only the workflow
//! orchestrator calls the transition methods below; readers get clones or
//! shared borrows.

use std::fmt;

use serde::Serialize;

use super::{AddressRecord, WeatherSnapshot};

/// Phase of the current submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowPhase {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Waiting for the postal-code lookup
    Resolving,
    /// Address known, waiting for the forecast
    Enriching,
    /// Both steps attempted
    Settled,
    /// Validation or address lookup failed
    Failed,
}

impl WorkflowPhase {
    /// Whether a lookup is in flight
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Resolving | Self::Enriching)
    }

    /// Whether the submission has finished, successfully or not
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Settled | Self::Failed)
    }
}

impl fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Resolving => "resolving",
            Self::Enriching => "enriching",
            Self::Settled => "settled",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Everything the presentation layer displays
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkflowState {
    /// Current phase
    pub phase: WorkflowPhase,
    /// Latest resolved address
    pub address: Option<AddressRecord>,
    /// Latest weather snapshot
    pub weather: Option<WeatherSnapshot>,
    /// Latest user-visible error message
    pub error: Option<String>,
}

impl WorkflowState {
    /// Derived loading indicator
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Drop every result of the previous submission and start resolving
    pub fn begin_resolving(&mut self) {
        self.address = None;
        self.weather = None;
        self.error = None;
        self.phase = WorkflowPhase::Resolving;
    }

    /// Store the resolved address and move on to the forecast
    pub fn address_resolved(&mut self, record: AddressRecord) {
        self.address = Some(record);
        self.phase = WorkflowPhase::Enriching;
    }

    /// Finish the submission, with or without weather data
    pub fn settle(&mut self, weather: Option<WeatherSnapshot>) {
        self.weather = weather;
        self.phase = WorkflowPhase::Settled;
    }

    /// Record a fatal error; results of the previous submission are cleared
    pub fn fail(&mut self, message: impl Into<String>) {
        self.address = None;
        self.weather = None;
        self.error = Some(message.into());
        self.phase = WorkflowPhase::Failed;
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{CurrentConditions, DailyForecast, GeoLocation, PostalCode};

    fn record() -> AddressRecord {
        AddressRecord::new(
            PostalCode::parse("01001000").unwrap(),
            "Praça da Sé",
            "Sé",
            "São Paulo",
            "SP",
            GeoLocation::new(-23.550_278_4, -46.634_217_9).ok(),
        )
    }

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            current: CurrentConditions {
                temperature: 25.0,
                condition_code: 0,
                wind_speed: 5.0,
                wind_direction: 90.0,
                humidity: None,
                observed_at: None,
            },
            daily: vec![DailyForecast {
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                temperature_max: 30.0,
                temperature_min: 20.0,
                condition_code: 0,
            }],
            timezone: None,
        }
    }

    #[test]
    fn default_is_idle_and_not_loading() {
        let state = WorkflowState::default();
        assert_eq!(state.phase, WorkflowPhase::Idle);
        assert!(!state.is_loading());
    }

    #[test]
    fn loading_derived_from_phase() {
        assert!(WorkflowPhase::Resolving.is_loading());
        assert!(WorkflowPhase::Enriching.is_loading());
        assert!(!WorkflowPhase::Settled.is_loading());
        assert!(!WorkflowPhase::Failed.is_loading());
        assert!(WorkflowPhase::Failed.is_terminal());
    }

    #[test]
    fn begin_resolving_clears_both_results_and_error() {
        let mut state = WorkflowState::default();
        state.address_resolved(record());
        state.settle(Some(snapshot()));
        state.error = Some("old".into());

        state.begin_resolving();

        assert_eq!(state.phase, WorkflowPhase::Resolving);
        assert!(state.address.is_none());
        assert!(state.weather.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn happy_path_transitions() {
        let mut state = WorkflowState::default();
        state.begin_resolving();
        state.address_resolved(record());
        assert_eq!(state.phase, WorkflowPhase::Enriching);
        assert!(state.is_loading());

        state.settle(Some(snapshot()));
        assert_eq!(state.phase, WorkflowPhase::Settled);
        assert!(state.address.is_some());
        assert!(state.weather.is_some());
    }

    #[test]
    fn settle_without_weather_keeps_address() {
        let mut state = WorkflowState::default();
        state.begin_resolving();
        state.address_resolved(record());
        state.settle(None);
        assert_eq!(state.phase, WorkflowPhase::Settled);
        assert!(state.address.is_some());
        assert!(state.weather.is_none());
    }

    #[test]
    fn fail_records_message() {
        let mut state = WorkflowState::default();
        state.begin_resolving();
        state.fail("CEP 00000000 not found");
        assert_eq!(state.phase, WorkflowPhase::Failed);
        assert_eq!(state.error.as_deref(), Some("CEP 00000000 not found"));
        assert!(state.address.is_none());
    }

    #[test]
    fn phase_serializes_snake_case() {
        let json = serde_json::to_value(WorkflowState::default()).unwrap();
        assert_eq!(json["phase"], "idle");
        assert_eq!(WorkflowPhase::Enriching.to_string(), "enriching");
    }
}
