//! Configuration loader
//!
//! Loads metrics configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `MLDIAG_PROJECT_ID` is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MLDIAG_PROJECT_ID`: Cloud project that owns the log (required)
//! - `MLDIAG_LOG_NAME`: Short log name
//! - `MLDIAG_METRICS_ENABLED`: Whether metrics are written (true/false)
//! - `MLDIAG_STRICT_VALUES`: Fail batches on unsupported value shapes
//! - `MLDIAG_LOGGING_ENDPOINT`: `entries:write` endpoint URL
//! - `MLDIAG_REQUEST_TIMEOUT_SECS`: HTTP timeout in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./mldiag.json` or `./mldiag.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../mldiag.json` or `../mldiag.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use mldiag_domain::{MetricsConfig, RecordingError, Result, ValueShapePolicy};

use crate::errors::InfraError;

/// Load configuration with automatic fallback strategy
///
/// Environment variables win whenever `MLDIAG_PROJECT_ID` is set; a
/// malformed variable next to it is an error, not a reason to read a file.
/// Without the project id the configuration comes from a config file.
///
/// # Errors
/// Returns `RecordingError::Config` if:
/// - An environment variable has an invalid value
/// - No config file is found when the project id is unset
/// - File format is invalid
/// - The loaded configuration fails validation
pub fn load() -> Result<MetricsConfig> {
    if std::env::var_os("MLDIAG_PROJECT_ID").is_none() {
        tracing::debug!("MLDIAG_PROJECT_ID not set, trying config file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// Only `MLDIAG_PROJECT_ID` is required; everything else keeps its default
/// when unset.
///
/// # Errors
/// Returns `RecordingError::Config` if the project id is missing or a
/// variable has an invalid value.
pub fn load_from_env() -> Result<MetricsConfig> {
    let mut config = MetricsConfig::new(env_var("MLDIAG_PROJECT_ID")?);

    if let Ok(log_name) = std::env::var("MLDIAG_LOG_NAME") {
        config.log_name = log_name;
    }
    config.enabled = env_bool("MLDIAG_METRICS_ENABLED", config.enabled);
    if env_bool("MLDIAG_STRICT_VALUES", false) {
        config.value_shape_policy = ValueShapePolicy::Strict;
    }
    if let Ok(endpoint) = std::env::var("MLDIAG_LOGGING_ENDPOINT") {
        config.endpoint = endpoint;
    }
    if let Ok(raw) = std::env::var("MLDIAG_REQUEST_TIMEOUT_SECS") {
        config.timeout_seconds = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| RecordingError::Config(format!("Invalid request timeout: {}", e)))?;
    }

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `RecordingError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The loaded configuration fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<MetricsConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RecordingError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RecordingError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RecordingError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<MetricsConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents)
            .map_err(|e| RecordingError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(RecordingError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parent, and the directory
/// of the running executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
        candidates.extend([cwd.join("../mldiag.json"), cwd.join("../mldiag.toml")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(dir: &Path) -> [PathBuf; 4] {
    [
        dir.join("mldiag.json"),
        dir.join("mldiag.toml"),
        dir.join("config.json"),
        dir.join("config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `RecordingError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        RecordingError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
