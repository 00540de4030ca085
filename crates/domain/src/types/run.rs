//! Run identity attached to every batch write

use serde::{Deserialize, Serialize};

/// Identity and region of the active training run
///
/// Supplied by the run-context collaborator on every write; never cached by
/// the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunContext {
    pub run_id: String,
    pub location: String,
}

impl RunContext {
    pub fn new(run_id: impl Into<String>, location: impl Into<String>) -> Self {
        Self { run_id: run_id.into(), location: location.into() }
    }
}
