//! Cloud Logging `entries:write` sink
//!
//! Every flush is one POST carrying the whole batch with
//! `partialSuccess: false`, so the service either stores all entries or
//! none of them.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mldiag_core::LogSink;
use mldiag_domain::{LogEntry, MetricsConfig, RecordingError, Result};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::credentials::{AccessTokenProvider, Credentials};
use crate::http::HttpClient;

const USER_AGENT: &str = concat!("mldiag/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WriteEntriesRequest<'a> {
    log_name: &'a str,
    entries: &'a [LogEntry],
    partial_success: bool,
}

/// Log sink backed by the Cloud Logging REST API
pub struct CloudLoggingSink {
    http: HttpClient,
    endpoint: Url,
    log_name: String,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl CloudLoggingSink {
    /// Open a sink for the log named by `config`.
    ///
    /// # Errors
    /// Returns `RecordingError::Config` if the configuration is invalid or
    /// the HTTP client cannot be constructed.
    pub fn open(config: &MetricsConfig, credentials: Credentials) -> Result<Self> {
        config.validate().map_err(init_failure)?;

        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            RecordingError::Config(format!(
                "Failed to initialize logging client: invalid endpoint '{}': {e}",
                config.endpoint
            ))
        })?;

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()
            .map_err(init_failure)?;

        debug!(endpoint = %endpoint, log_name = %config.full_log_name(), "Opened Cloud Logging sink");

        Ok(Self {
            http,
            endpoint,
            log_name: config.full_log_name(),
            tokens: credentials.into_provider(),
        })
    }

    pub fn log_name(&self) -> &str {
        &self.log_name
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn init_failure(error: RecordingError) -> RecordingError {
    match error {
        RecordingError::Config(detail) => {
            RecordingError::Config(format!("Failed to initialize logging client: {detail}"))
        }
        other => other,
    }
}

impl fmt::Debug for CloudLoggingSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudLoggingSink")
            .field("endpoint", &self.endpoint.as_str())
            .field("log_name", &self.log_name)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl LogSink for CloudLoggingSink {
    #[instrument(skip(self, entries), fields(count = entries.len(), log_name = %self.log_name))]
    async fn write_entries(&self, entries: Vec<LogEntry>) -> Result<()> {
        let token = self.tokens.access_token()?;

        let body =
            WriteEntriesRequest { log_name: &self.log_name, entries: &entries, partial_success: false };

        let request = self
            .http
            .request(Method::POST, self.endpoint.clone())
            .bearer_auth(token)
            .json(&body);

        let response = self.http.send(request).await?;
        let status = response.status();

        if status.is_success() {
            debug!(status = %status, "Log entries accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, "Cloud Logging rejected entries");

        let message = format!("entries.write returned {}: {}", status.as_u16(), body.trim());
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(RecordingError::Auth(message)),
            _ => Err(RecordingError::Sink(message)),
        }
    }
}
