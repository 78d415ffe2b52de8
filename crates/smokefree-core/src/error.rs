//! Core error types for smokefree-core.
//!
//! The metrics engine itself never fails; these errors only surface at the
//! edges. Preferences I/O reports through [`CoreError`], catalog checks
//! return a bare [`ValidationError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for smokefree-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load preferences from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save preferences to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown preference key
    #[error("Unknown preference key: {0}")]
    UnknownKey(String),

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Catalog entries out of order
    #[error("{catalog} entry {index} is out of order: {message}")]
    OutOfOrder {
        catalog: &'static str,
        index: usize,
        message: String,
    },

    /// Duplicate entry name
    #[error("Duplicate {catalog} entry: {name}")]
    Duplicate {
        catalog: &'static str,
        name: &'static str,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
