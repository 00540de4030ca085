//! Shared test helpers for `mldiag-core` integration tests.
//!
//! In-memory stand-ins for the run-context collaborator and the metrics
//! writer so tests can drive the public entry points end to end.

pub mod fakes;
