//! Fixed run context for processes that know their run up front

use std::sync::atomic::{AtomicBool, Ordering};

use mldiag_core::RunContextProvider;
use mldiag_domain::{RecordingError, Result};

/// Run id of the active run.
pub const ENV_RUN_ID: &str = "MLDIAG_RUN_ID";
/// Region of the active run.
pub const ENV_LOCATION: &str = "MLDIAG_LOCATION";
/// Index of this host within the run; host 0 is the designated host.
pub const ENV_HOST_INDEX: &str = "MLDIAG_HOST_INDEX";

/// [`RunContextProvider`] with an immutable identity
///
/// The run can be ended once; recording afterwards fails with a
/// configuration error.
#[derive(Debug)]
pub struct StaticRunContext {
    run_id: String,
    location: String,
    designated_host: bool,
    active: AtomicBool,
}

impl StaticRunContext {
    pub fn new(run_id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            location: location.into(),
            designated_host: true,
            active: AtomicBool::new(true),
        }
    }

    pub fn with_designated_host(mut self, designated: bool) -> Self {
        self.designated_host = designated;
        self
    }

    /// Read the run identity from `MLDIAG_RUN_ID`, `MLDIAG_LOCATION` and
    /// the optional `MLDIAG_HOST_INDEX` (default 0).
    ///
    /// # Errors
    /// Returns `RecordingError::Config` if a required variable is missing or
    /// the host index is not a number.
    pub fn from_env() -> Result<Self> {
        let run_id = required_env(ENV_RUN_ID)?;
        let location = required_env(ENV_LOCATION)?;
        let host_index = match std::env::var(ENV_HOST_INDEX) {
            Ok(raw) => raw.trim().parse::<u32>().map_err(|e| {
                RecordingError::Config(format!("Invalid {ENV_HOST_INDEX} '{raw}': {e}"))
            })?,
            Err(_) => 0,
        };

        Ok(Self::new(run_id, location).with_designated_host(host_index == 0))
    }

    /// Mark the run as finished.
    pub fn end(&self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

impl RunContextProvider for StaticRunContext {
    fn current_run_id(&self) -> String {
        self.run_id.clone()
    }

    fn current_location(&self) -> String {
        self.location.clone()
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    fn is_designated_host(&self) -> bool {
        self.designated_host
    }
}

fn required_env(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| RecordingError::Config(format!("Missing required environment variable: {key}")))
}
