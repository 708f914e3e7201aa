//! Import source trait and result types.
//!
//! This module defines the abstractions shared by favorites sources, so the
//! pipeline can read Sequel Pro and Sequel Ace the same way.

use serde::Serialize;

use crate::error::ImportError;
use crate::models::FlattenedEntry;

/// Result of reading a favorites source: flattened entries plus anything
/// that was dropped on the way.
#[derive(Debug, Default)]
pub struct ImportResult {
    /// Flattened tree entries in traversal order
    pub entries: Vec<FlattenedEntry>,
    /// Nodes that were dropped (empty folders and the like)
    pub skipped: Vec<SkippedEntry>,
}

impl ImportResult {
    /// Creates a new empty import result
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a summary string of the import result
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Entries: {}, Skipped: {}",
            self.entries.len(),
            self.skipped.len()
        )
    }

    /// Adds a skipped entry to the result
    pub fn add_skipped(&mut self, entry: SkippedEntry) {
        self.skipped.push(entry);
    }
}

/// A node that was skipped during import or mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    /// Identifier or name of the skipped node
    pub identifier: String,
    /// Reason why the node was skipped
    pub reason: String,
    /// Source location (file path, folder name, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl SkippedEntry {
    /// Creates a new skipped entry
    #[must_use]
    pub fn new(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            reason: reason.into(),
            location: None,
        }
    }

    /// Creates a new skipped entry with location information
    #[must_use]
    pub fn with_location(
        identifier: impl Into<String>,
        reason: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            reason: reason.into(),
            location: Some(location.into()),
        }
    }
}

/// Trait for favorites source implementations.
pub trait ImportSource: Send + Sync {
    /// Returns the unique identifier for this import source
    fn source_id(&self) -> &'static str;

    /// Returns a human-readable name for this import source
    fn display_name(&self) -> &'static str;

    /// Checks if this import source is available (favorites file exists)
    fn is_available(&self) -> bool {
        self.default_paths().iter().any(|p| p.exists())
    }

    /// Returns the paths where this source keeps its favorites
    fn default_paths(&self) -> Vec<std::path::PathBuf>;

    /// Imports favorites from the first default path
    ///
    /// # Errors
    ///
    /// Returns an error if there is no default path or the favorites tree
    /// is malformed.
    fn import(&self) -> Result<ImportResult, ImportError> {
        let paths = self.default_paths();
        let path = paths
            .first()
            .ok_or_else(|| ImportError::FileNotFound(std::path::PathBuf::from("Favorites.plist")))?;
        self.import_from_path(path)
    }

    /// Imports favorites from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the favorites tree is malformed.
    fn import_from_path(&self, path: &std::path::Path) -> Result<ImportResult, ImportError>;
}
