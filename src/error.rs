//! Error types for Larmor.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Larmor operations.
pub type Result<T> = std::result::Result<T, LarmorError>;

/// Errors that can occur in Larmor.
#[derive(Debug, Error)]
pub enum LarmorError {
    /// An array's length does not match the coordinate arrays.
    #[error("{what} length mismatch: expected {expected} points, got {actual}")]
    ShapeMismatch {
        /// Name of the offending array.
        what: String,
        /// Length of the coordinate arrays.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Invalid binning or range configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to open a container file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path of the container.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// Container opened but is in an invalid state.
    #[error("File is not a usable container: {path}")]
    InvalidFile {
        /// Path of the container.
        path: PathBuf,
    },

    /// Named object not found in a container.
    #[error("Object not found: {name}")]
    NotFound {
        /// Key that was looked up.
        name: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Container serialization error.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl LarmorError {
    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }

    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a NotFound error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}
