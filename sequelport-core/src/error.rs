//! Error types for `SequelPort`
//!
//! This module defines all error types used by the migration pipeline,
//! providing descriptive error messages for configuration, source import,
//! and destination export operations.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for `SequelPort` operations
#[derive(Debug, Error)]
pub enum SequelPortError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Source favorites errors (Sequel Pro, Sequel Ace)
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Destination errors (TablePlus)
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Errors related to configuration file operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Configuration file or directory not found
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Failed to write configuration file
    #[error("Failed to write configuration: {0}")]
    Write(String),

    /// Failed to serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    /// Failed to deserialize configuration
    #[error("Failed to deserialize configuration: {0}")]
    Deserialize(String),
}

/// Errors related to reading source favorites
#[derive(Debug, Error)]
pub enum ImportError {
    /// Failed to parse import source
    #[error("Failed to parse {source_name}: {reason}")]
    ParseError {
        /// The import source (e.g., "Sequel Pro")
        source_name: String,
        /// The reason for parse failure
        reason: String,
    },

    /// Import source file not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// A structural key the favorites tree cannot do without is absent
    #[error("Missing key \"{key}\" in {context}")]
    MissingKey {
        /// The missing key (e.g., "Favorites Root")
        key: String,
        /// Where the key was expected
        context: String,
    },

    /// Invalid entry in import source
    #[error("Invalid entry in {source_name}: {reason}")]
    InvalidEntry {
        /// The import source
        source_name: String,
        /// The reason the entry is invalid
        reason: String,
    },
}

/// Errors related to writing destination property lists
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to encode records as a property list
    #[error("Failed to serialize {}: {reason}", .path.display())]
    Serialize {
        /// The destination the records were meant for
        path: PathBuf,
        /// The encoder's failure message
        reason: String,
    },

    /// Failed to write a destination file
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// The destination that failed
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Returns the destination path this error refers to
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Serialize { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Result type alias for `SequelPort` operations
pub type Result<T> = std::result::Result<T, SequelPortError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for destination export operations
pub type ExportResult<T> = std::result::Result<T, ExportError>;
