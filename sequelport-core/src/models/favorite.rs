//! Source favorites tree as stored by Sequel Pro and Sequel Ace.

/// A saved connection profile from the source favorites file.
///
/// Every field is optional; absent values are defaulted when the record is
/// mapped to the destination schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteRecord {
    /// Display name (`name`)
    pub name: Option<String>,
    /// Database host (`host`)
    pub host: Option<String>,
    /// Database port (`port`)
    pub port: Option<String>,
    /// Database name (`database`)
    pub database: Option<String>,
    /// Database user (`user`)
    pub user: Option<String>,
    /// Local socket path (`socket`)
    pub socket: Option<String>,
    /// SSH tunnel host (`sshHost`)
    pub ssh_host: Option<String>,
    /// SSH tunnel port (`sshPort`)
    pub ssh_port: Option<String>,
    /// SSH tunnel user (`sshUser`)
    pub ssh_user: Option<String>,
    /// Label color, an index into the source's seven-color palette (`colorIndex`)
    pub color_index: Option<i64>,
}

impl FavoriteRecord {
    /// Creates a record with only a name set
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns true if the favorite tunnels through SSH
    #[must_use]
    pub fn is_over_ssh(&self) -> bool {
        self.ssh_host.as_deref().is_some_and(|h| !h.is_empty())
    }
}

/// A node of the favorites tree, classified once when the source is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteNode {
    /// A folder holding further nodes. `name` is `None` when the folder has
    /// no usable name.
    Folder {
        /// Folder name
        name: Option<String>,
        /// Child nodes in stored order
        children: Vec<FavoriteNode>,
    },
    /// A saved connection
    Favorite(FavoriteRecord),
    /// An array found where a node was expected; carries its length
    Sequence(usize),
    /// A scalar found where a node was expected; carries the plist type name
    Unsupported(&'static str),
}

impl FavoriteNode {
    /// Creates a folder node
    #[must_use]
    pub fn folder(name: impl Into<String>, children: Vec<Self>) -> Self {
        let name = name.into();
        Self::Folder {
            name: (!name.is_empty()).then_some(name),
            children,
        }
    }

    /// Returns the favorite record if this node is one
    #[must_use]
    pub const fn as_favorite(&self) -> Option<&FavoriteRecord> {
        match self {
            Self::Favorite(record) => Some(record),
            _ => None,
        }
    }

    /// Returns a short label used when reporting a skipped node
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Folder { name, .. } => name.clone().unwrap_or_else(|| "<unnamed folder>".into()),
            Self::Favorite(record) => record.name.clone().unwrap_or_default(),
            Self::Sequence(len) => format!("<array of {len}>"),
            Self::Unsupported(kind) => format!("<{kind}>"),
        }
    }
}

/// A node lifted out of the tree together with its nearest enclosing folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedEntry {
    /// Name of the immediate enclosing folder, `None` at the root
    pub group: Option<String>,
    /// The node itself
    pub node: FavoriteNode,
}

impl FlattenedEntry {
    /// Creates a new flattened entry
    #[must_use]
    pub const fn new(group: Option<String>, node: FavoriteNode) -> Self {
        Self { group, node }
    }
}
