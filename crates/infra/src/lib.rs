//! # MLDiag Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Log entry building and the batch writers (Cloud Logging and no-op)
//! - Log sinks (Cloud Logging REST, in-memory)
//! - Credential providers, a static run context and configuration loading
//! - The factory that wires a recorder from configuration
//!
//! ## Architecture
//! - Implements traits defined in `mldiag-core`
//! - Depends on `mldiag-domain` and `mldiag-core`
//! - Contains all "impure" code (HTTP, environment, files)

pub mod config;
pub mod credentials;
pub mod errors;
pub mod factory;
pub mod http;
pub mod logging;
pub mod run_context;

// Re-export commonly used items
pub use credentials::{AccessTokenProvider, Credentials, EnvTokenProvider, StaticTokenProvider};
pub use errors::InfraError;
pub use factory::{build_writer, init_recorder, shutdown_recorder};
pub use http::HttpClient;
pub use logging::{
    CloudLoggingSink, CloudLoggingWriter, InMemoryLogSink, LogEntryBuilder, NoOpMetricsWriter,
};
pub use run_context::StaticRunContext;
