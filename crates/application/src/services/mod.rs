//! Application services - Use case implementations

mod lookup_workflow;

pub use lookup_workflow::{LookupWorkflow, SubmissionPolicy};
