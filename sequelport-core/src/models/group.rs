//! TablePlus connection group model.

use serde::{Deserialize, Serialize};

/// A group entry in TablePlus' `ConnectionGroups.plist`.
///
/// The source format has no group identifier, so the folder name doubles as
/// the ID. Membership lives on each connection's `GroupID`, which is why
/// `connections` is always written empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionGroup {
    /// Unique identifier for the group (same as its name)
    #[serde(rename = "ID")]
    pub id: String,
    /// Whether the group is expanded in the sidebar (0 = collapsed)
    #[serde(rename = "IsExpanded")]
    pub is_expanded: i64,
    /// Display name
    #[serde(rename = "Name")]
    pub name: String,
    /// Member connection IDs
    #[serde(rename = "Connections", default)]
    pub connections: Vec<String>,
}

impl ConnectionGroup {
    /// Creates a collapsed, memberless group named after a source folder
    #[must_use]
    pub fn from_folder_name(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            is_expanded: 0,
            name,
            connections: Vec::new(),
        }
    }
}
