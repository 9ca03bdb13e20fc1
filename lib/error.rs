//! Error types for stackgen.

use std::path::PathBuf;
use thiserror::Error;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Result type for stackgen operations.
pub type StackResult<T> = Result<T, StackError>;

/// Error type for stackgen operations.
#[derive(Debug, Error)]
pub enum StackError {
    /// The manifest could not be encoded as YAML.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// The manifest could not be written to its destination.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration {}: {message}", .path.display())]
    ConfigParse {
        /// Path of the offending file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// Configuration file named explicitly does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No services were given in non-interactive mode.
    #[error("No services selected")]
    NoServices,

    /// User cancelled operation.
    #[error("Operation cancelled")]
    Cancelled,

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl StackError {
    /// Wrap an IO error with the path it concerns.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StackError::Write {
            path: path.into(),
            source,
        }
    }
}
