//! Install locations of the source and destination applications.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

const SEQUEL_PRO_FAVORITES: &str = "Library/Application Support/Sequel Pro/Data/Favorites.plist";
const SEQUEL_ACE_FAVORITES: &str = "Library/Containers/com.sequel-ace.sequel-ace/Data/Library/Application Support/Sequel Ace/Data/Favorites.plist";
const TABLEPLUS_STANDALONE_DIR: &str = "Library/Application Support/com.tinyapp.TablePlus/Data";
const TABLEPLUS_SETAPP_DIR: &str = "Library/Application Support/com.tinyapp.TablePlus-setapp/Data";

/// File name of TablePlus' connection list
pub const CONNECTIONS_FILE: &str = "Connections.plist";
/// File name of TablePlus' group list
pub const GROUPS_FILE: &str = "ConnectionGroups.plist";

/// Application whose favorites are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceApp {
    /// Sequel Pro
    SequelPro,
    /// Sequel Ace (sandboxed container)
    #[default]
    SequelAce,
}

impl SourceApp {
    /// Returns the display name for this source
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::SequelPro => "Sequel Pro",
            Self::SequelAce => "Sequel Ace",
        }
    }
}

impl fmt::Display for SourceApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// TablePlus edition whose files are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetApp {
    /// TablePlus downloaded from tableplus.com
    #[default]
    Standalone,
    /// TablePlus installed through Setapp
    Setapp,
}

impl TargetApp {
    /// Returns the display name for this target
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Standalone => "TablePlus",
            Self::Setapp => "TablePlus (Setapp)",
        }
    }
}

impl fmt::Display for TargetApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Resolves application files relative to a home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    home: PathBuf,
}

impl InstallPaths {
    /// Creates install paths rooted at the current user's home directory
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn from_home_dir() -> ConfigResult<Self> {
        let home = dirs::home_dir().ok_or_else(|| ConfigError::NotFound(PathBuf::from("~")))?;
        Ok(Self { home })
    }

    /// Creates install paths rooted at a custom directory
    #[must_use]
    pub const fn with_home(home: PathBuf) -> Self {
        Self { home }
    }

    /// Returns the favorites file of a source application
    #[must_use]
    pub fn source_favorites(&self, app: SourceApp) -> PathBuf {
        match app {
            SourceApp::SequelPro => self.home.join(SEQUEL_PRO_FAVORITES),
            SourceApp::SequelAce => self.home.join(SEQUEL_ACE_FAVORITES),
        }
    }

    /// Returns the data directory of a TablePlus edition
    #[must_use]
    pub fn target_dir(&self, target: TargetApp) -> PathBuf {
        match target {
            TargetApp::Standalone => self.home.join(TABLEPLUS_STANDALONE_DIR),
            TargetApp::Setapp => self.home.join(TABLEPLUS_SETAPP_DIR),
        }
    }

    /// Returns the connections file of a TablePlus edition
    #[must_use]
    pub fn target_connections(&self, target: TargetApp) -> PathBuf {
        self.target_dir(target).join(CONNECTIONS_FILE)
    }

    /// Returns the groups file of a TablePlus edition
    #[must_use]
    pub fn target_groups(&self, target: TargetApp) -> PathBuf {
        self.target_dir(target).join(GROUPS_FILE)
    }
}
