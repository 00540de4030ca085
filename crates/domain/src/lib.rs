//! # MLDiag Domain
//!
//! Domain types for training-run metric capture.
//!
//! This crate contains:
//! - Caller-facing metric descriptions and canonical metric records
//! - The structured log entry shape shipped to the log sink
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other MLDiag crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
