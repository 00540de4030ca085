//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOGGING_ENDPOINT, DEFAULT_LOG_NAME, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::errors::{RecordingError, Result};

/// What to do with a record whose value is neither a number nor a list of
/// numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueShapePolicy {
    /// Skip the record, log a warning and keep writing the rest of the batch.
    #[default]
    Lenient,
    /// Fail the whole batch.
    Strict,
}

/// Metrics capture configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Cloud project that owns the log.
    pub project_id: String,
    #[serde(default = "default_log_name")]
    pub log_name: String,
    /// When false every write goes to the no-op writer.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub value_shape_policy: ValueShapePolicy,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl MetricsConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            log_name: default_log_name(),
            enabled: default_enabled(),
            value_shape_policy: ValueShapePolicy::default(),
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
        }
    }

    /// Configuration that captures nothing.
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::new(String::new()) }
    }

    /// Fully qualified log name: `projects/{project_id}/logs/{log_name}`.
    pub fn full_log_name(&self) -> String {
        format!("projects/{}/logs/{}", self.project_id, self.log_name)
    }

    /// Check the fields the real writer depends on.
    ///
    /// A disabled configuration is always valid.
    ///
    /// # Errors
    /// Returns `RecordingError::Config` if an enabled configuration has an
    /// empty project id or log name, or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        if self.project_id.trim().is_empty() {
            return Err(RecordingError::Config("project_id must not be empty".into()));
        }
        if self.log_name.trim().is_empty() {
            return Err(RecordingError::Config("log_name must not be empty".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(RecordingError::Config("timeout_seconds must be positive".into()));
        }
        Ok(())
    }
}

fn default_log_name() -> String {
    DEFAULT_LOG_NAME.to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    DEFAULT_LOGGING_ENDPOINT.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}
