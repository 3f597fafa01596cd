//! Error types for pkgsnap
//!
//! All modules use `PkgsnapResult<T>` as their return type. Only boundary
//! failures (config, output directory, CSV writes) live here; everything
//! inside the export pipeline degrades to an empty result instead of erroring.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for pkgsnap operations
pub type PkgsnapResult<T> = Result<T, PkgsnapError>;

/// All errors that can occur in pkgsnap
#[derive(Error, Debug)]
pub enum PkgsnapError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Output errors
    #[error("Failed to create output directory {path}: {source}")]
    OutputDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl PkgsnapError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a report write error
    pub fn report_write(path: &Path, source: csv::Error) -> Self {
        Self::ReportWrite {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ConfigInvalid { .. } => {
                Some("Fix the TOML syntax, or delete the file to fall back to defaults")
            }
            Self::OutputDirCreate { .. } => Some("Pass a writable directory with -o"),
            _ => None,
        }
    }
}
