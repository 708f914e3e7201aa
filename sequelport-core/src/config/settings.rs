//! Persistent settings read from `config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::{SourceApp, TargetApp};

/// Settings that preselect a migration's source, target and file locations.
///
/// The confirmation gate is not part of the settings; it only comes from the
/// command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Application to read favorites from
    #[serde(default)]
    pub import_from: SourceApp,
    /// TablePlus edition to write to
    #[serde(default)]
    pub import_to: TargetApp,
    /// Overrides the source favorites file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<PathBuf>,
    /// Overrides the destination connections file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections_path: Option<PathBuf>,
    /// Overrides the destination groups file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups_path: Option<PathBuf>,
    /// Copy existing destination files aside before overwriting them
    #[serde(default = "default_backup")]
    pub backup: bool,
}

const fn default_backup() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            import_from: SourceApp::default(),
            import_to: TargetApp::default(),
            source_path: None,
            connections_path: None,
            groups_path: None,
            backup: default_backup(),
        }
    }
}

impl Settings {
    /// Expands a leading `~` in every path override
    #[must_use]
    pub fn expanded(mut self) -> Self {
        self.source_path = self.source_path.map(expand_tilde);
        self.connections_path = self.connections_path.map(expand_tilde);
        self.groups_path = self.groups_path.map(expand_tilde);
        self
    }
}

/// Expands a leading `~` using the current home directory
#[must_use]
pub fn expand_tilde(path: PathBuf) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path,
    }
}
