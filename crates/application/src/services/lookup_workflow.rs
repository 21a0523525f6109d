//! Lookup-and-enrich workflow
//!
//! Drives one submission through `Idle → Resolving → (Enriching | Failed) →
//! Settled`: normalize the postal code, resolve the address, then fetch the
//! weather for its coordinates. Address failures end the submission; weather
//! failures are logged and the submission still settles with the address.
//!
//! The state lives in a `watch` channel. This service owns the only sender, so
//! it is the single mutator; the presentation layer reads snapshots or
//! subscribes to changes.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use domain::{GeoLocation, PostalCode, WeatherSnapshot, WorkflowState};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{AddressLookupPort, WeatherPort};

/// What happens to the shared state when submissions overlap
///
/// Nothing is cancelled under either policy; both only decide whose writes
/// reach the shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPolicy {
    /// Every submission publishes its state; the last one to settle wins
    #[default]
    LastToSettle,
    /// Writes from a submission superseded by a newer one are dropped
    LatestOnly,
}

/// Orchestrates the postal-code lookup followed by the weather lookup
pub struct LookupWorkflow {
    address_port: Arc<dyn AddressLookupPort>,
    weather_port: Arc<dyn WeatherPort>,
    policy: SubmissionPolicy,
    state: watch::Sender<WorkflowState>,
    submissions: AtomicU64,
}

impl fmt::Debug for LookupWorkflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupWorkflow")
            .field("policy", &self.policy)
            .field("phase", &self.state.borrow().phase)
            .field("submissions", &self.submissions.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl LookupWorkflow {
    /// Create a workflow in the `Idle` phase
    pub fn new(
        address_port: Arc<dyn AddressLookupPort>,
        weather_port: Arc<dyn WeatherPort>,
    ) -> Self {
        let (state, _) = watch::channel(WorkflowState::default());
        Self {
            address_port,
            weather_port,
            policy: SubmissionPolicy::default(),
            state,
            submissions: AtomicU64::new(0),
        }
    }

    /// Set the resubmission policy
    #[must_use]
    pub const fn with_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active resubmission policy
    pub const fn policy(&self) -> SubmissionPolicy {
        self.policy
    }

    /// Snapshot of the shared state
    pub fn state(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    /// Derived loading indicator
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Run one submission to completion
    ///
    /// Returns the state this submission settled into. Validation and
    /// address lookup errors are returned as `Err` after the shared state has
    /// moved to `Failed` with the error message.
    #[instrument(skip(self, raw), fields(policy = ?self.policy))]
    pub async fn submit(&self, raw: &str) -> Result<WorkflowState, ApplicationError> {
        let ticket = self.submissions.fetch_add(1, Ordering::SeqCst) + 1;
        let mut local = WorkflowState::default();

        let postal_code = match PostalCode::parse(raw) {
            Ok(code) => code,
            Err(e) => {
                let err = ApplicationError::from(e);
                warn!(ticket, error = %err, "Rejected postal code input");
                let message = err.to_string();
                self.apply(ticket, &mut local, |s| s.fail(message));
                return Err(err);
            },
        };

        info!(ticket, cep = %postal_code, "Resolving postal code");
        self.apply(ticket, &mut local, WorkflowState::begin_resolving);

        let record = match self.address_port.resolve(&postal_code).await {
            Ok(record) => record,
            Err(err) => {
                info!(ticket, cep = %postal_code, error = %err, "Address lookup failed");
                let message = err.to_string();
                self.apply(ticket, &mut local, |s| s.fail(message));
                return Err(err);
            },
        };

        let location = record.location;
        info!(ticket, address = %record.one_line(), "Address resolved");
        self.apply(ticket, &mut local, |s| s.address_resolved(record));

        let weather = match location {
            Some(location) => self.enrich(ticket, &location).await,
            None => {
                warn!(ticket, cep = %postal_code, "Address has no coordinates, skipping weather lookup");
                None
            },
        };

        self.apply(ticket, &mut local, |s| s.settle(weather));
        info!(ticket, has_weather = local.weather.is_some(), "Submission settled");
        Ok(local)
    }

    /// Weather lookup; failures are logged and swallowed
    async fn enrich(&self, ticket: u64, location: &GeoLocation) -> Option<WeatherSnapshot> {
        debug!(ticket, lat = location.latitude(), lon = location.longitude(), "Fetching weather");
        match self.weather_port.get_snapshot(location).await {
            Ok(snapshot) => {
                debug!(ticket, days = snapshot.daily.len(), "Weather snapshot received");
                Some(snapshot)
            },
            Err(err) => {
                warn!(
                    ticket,
                    error = %err,
                    lat = location.latitude(),
                    lon = location.longitude(),
                    "Weather lookup failed, settling with address only"
                );
                None
            },
        }
    }

    /// Apply a transition to this submission's own state and, when the
    /// policy allows, publish that whole state
    ///
    /// Publishing the full state keeps address and weather from the same
    /// submission together when submissions interleave.
    fn apply<F>(&self, ticket: u64, local: &mut WorkflowState, transition: F)
    where
        F: FnOnce(&mut WorkflowState),
    {
        transition(local);
        // the currency check runs under the channel's write lock
        let published = self.state.send_if_modified(|shared| {
            if self.accepts(ticket) {
                shared.clone_from(local);
                true
            } else {
                false
            }
        });
        if !published {
            debug!(ticket, "Dropped update from superseded submission");
        }
    }

    fn accepts(&self, ticket: u64) -> bool {
        match self.policy {
            SubmissionPolicy::LastToSettle => true,
            SubmissionPolicy::LatestOnly => self.submissions.load(Ordering::SeqCst) == ticket,
        }
    }
}
