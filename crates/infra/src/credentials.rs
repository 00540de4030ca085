//! Access-token providers for the Cloud Logging sink
//!
//! Token acquisition itself (service accounts, metadata server, refresh) is
//! owned by the host process. The sink only asks a provider for a bearer
//! token right before each flush.

use std::fmt;
use std::sync::Arc;

use mldiag_domain::{RecordingError, Result};

/// Environment variable read by [`Credentials::Ambient`].
pub const DEFAULT_TOKEN_ENV_VAR: &str = "MLDIAG_ACCESS_TOKEN";

/// Source of bearer tokens
pub trait AccessTokenProvider: Send + Sync {
    /// # Errors
    /// Returns `RecordingError::Auth` when no token is available.
    fn access_token(&self) -> Result<String>;
}

/// Fixed token supplied by the caller.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenProvider").field("token", &"<redacted>").finish()
    }
}

impl AccessTokenProvider for StaticTokenProvider {
    fn access_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

/// Token read from an environment variable on every call, so an external
/// refresher can rotate it.
#[derive(Debug, Clone)]
pub struct EnvTokenProvider {
    var: String,
}

impl EnvTokenProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl AccessTokenProvider for EnvTokenProvider {
    fn access_token(&self) -> Result<String> {
        match std::env::var(&self.var) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(RecordingError::Auth(format!(
                "no access token in environment variable {}",
                self.var
            ))),
        }
    }
}

/// How the sink authenticates
#[derive(Clone)]
pub enum Credentials {
    /// An explicit token.
    AccessToken(String),
    /// A caller-managed provider.
    Provider(Arc<dyn AccessTokenProvider>),
    /// Token from [`DEFAULT_TOKEN_ENV_VAR`].
    Ambient,
}

impl Credentials {
    pub fn into_provider(self) -> Arc<dyn AccessTokenProvider> {
        match self {
            Self::AccessToken(token) => Arc::new(StaticTokenProvider::new(token)),
            Self::Provider(provider) => provider,
            Self::Ambient => Arc::new(EnvTokenProvider::new(DEFAULT_TOKEN_ENV_VAR)),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessToken(_) => f.write_str("Credentials::AccessToken(<redacted>)"),
            Self::Provider(_) => f.write_str("Credentials::Provider"),
            Self::Ambient => f.write_str("Credentials::Ambient"),
        }
    }
}
