//! Process-wide active recorder
//!
//! Lifecycle: [`set_active_recorder`] once at run start, read by every record
//! call, [`clear_active_recorder`] at run end. Ordering between
//! initialization and the first record call belongs to the caller.

use std::sync::Arc;

use mldiag_domain::{RecordingError, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::ports::RecordingBackend;

static ACTIVE_RECORDER: Lazy<RwLock<Option<Arc<dyn RecordingBackend>>>> =
    Lazy::new(|| RwLock::new(None));

/// Install the recorder used by [`crate::record`] and [`crate::record_metrics`].
///
/// Replaces any previously installed recorder.
pub fn set_active_recorder(recorder: Arc<dyn RecordingBackend>) {
    let previous = ACTIVE_RECORDER.write().replace(recorder);
    if previous.is_some() {
        debug!("Replaced previously active metrics recorder");
    }
    info!("Metrics recorder activated");
}

/// Current recorder.
///
/// The returned handle is independent of the registry lock.
///
/// # Errors
/// Returns `RecordingError::Config` when no recorder has been installed.
pub fn get_active_recorder() -> Result<Arc<dyn RecordingBackend>> {
    ACTIVE_RECORDER.read().as_ref().map(Arc::clone).ok_or_else(|| {
        RecordingError::Config(
            "No active metrics recorder; initialize a run before recording metrics".into(),
        )
    })
}

/// Remove the active recorder. Returns whether one was installed.
pub fn clear_active_recorder() -> bool {
    let cleared = ACTIVE_RECORDER.write().take().is_some();
    if cleared {
        info!("Metrics recorder cleared");
    }
    cleared
}

#[cfg(test)]
pub(crate) mod test_lock {
    use once_cell::sync::Lazy;
    use tokio::sync::Mutex;

    /// Serializes tests that touch the process-wide registry.
    pub(crate) static REGISTRY_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
}
