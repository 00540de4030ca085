//! Wiring from configuration to an active recorder

use std::sync::Arc;

use mldiag_core::{
    clear_active_recorder, set_active_recorder, MetricsRecorder, MetricsWriter, RunContextProvider,
};
use mldiag_domain::{MetricsConfig, Result};
use tracing::info;

use crate::credentials::Credentials;
use crate::logging::{CloudLoggingSink, CloudLoggingWriter, LogEntryBuilder, NoOpMetricsWriter};

/// Select the writer for `config`.
///
/// A disabled configuration yields [`NoOpMetricsWriter`] without looking at
/// the credentials.
///
/// # Errors
/// Returns `RecordingError::Config` if the Cloud Logging sink cannot be
/// opened.
pub fn build_writer(
    config: &MetricsConfig,
    credentials: Credentials,
) -> Result<Arc<dyn MetricsWriter>> {
    if !config.enabled {
        info!("Metrics capture disabled, using no-op writer");
        return Ok(Arc::new(NoOpMetricsWriter::new()));
    }

    let sink = CloudLoggingSink::open(config, credentials)?;
    let builder =
        LogEntryBuilder::new(config.project_id.clone()).with_policy(config.value_shape_policy);

    info!(log_name = %sink.log_name(), policy = ?config.value_shape_policy, "Cloud Logging writer ready");
    Ok(Arc::new(CloudLoggingWriter::new(Arc::new(sink), builder)))
}

/// Build a recorder for the current run and install it as the active one.
///
/// # Errors
/// Returns `RecordingError::Config` if the writer cannot be built; the
/// previously active recorder is left in place.
pub fn init_recorder(
    config: &MetricsConfig,
    credentials: Credentials,
    run_context: Arc<dyn RunContextProvider>,
) -> Result<Arc<MetricsRecorder>> {
    let writer = build_writer(config, credentials)?;
    let recorder = Arc::new(MetricsRecorder::new(run_context, writer));
    set_active_recorder(recorder.clone());
    Ok(recorder)
}

/// Uninstall the active recorder. Returns whether one was installed.
pub fn shutdown_recorder() -> bool {
    clear_active_recorder()
}
