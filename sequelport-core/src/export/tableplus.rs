//! TablePlus field mapping.
//!
//! Translates flattened Sequel favorites into TablePlus connection records.

use tracing::{debug, info_span};
use uuid::Uuid;

use crate::import::SkippedEntry;
use crate::logging::span_names;
use crate::models::{FavoriteNode, FavoriteRecord, FlattenedEntry, TablePlusConnection};

/// TablePlus status colors indexed by Sequel's `colorIndex`:
/// red, orange, yellow, green, blue, purple, gray.
pub const STATUS_COLORS: [&str; 7] = [
    "#FFD7D4", "#FFD78A", "#F8F7BD", "#DAEBC2", "#B2D5FF", "#E2BBFF", "#F8F8F8",
];

/// Output of mapping a batch of entries.
#[derive(Debug, Default)]
pub struct MappedConnections {
    /// Connections in entry order
    pub connections: Vec<TablePlusConnection>,
    /// Entries that did not describe a connection
    pub skipped: Vec<SkippedEntry>,
}

/// Returns the TablePlus status color for a Sequel color index.
///
/// Indices outside `0..=6`, and a missing index, give an empty string.
#[must_use]
pub fn status_color(color_index: Option<i64>) -> &'static str {
    color_index
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| STATUS_COLORS.get(i).copied())
        .unwrap_or("")
}

/// Builds a TablePlus connection from a favorite record.
#[must_use]
pub fn map_favorite(record: &FavoriteRecord, group: Option<&str>, id: Uuid) -> TablePlusConnection {
    let mut connection = TablePlusConnection::new(id);

    connection.connection_name = or_empty(record.name.as_deref());
    connection.database_host = or_empty(record.host.as_deref());
    connection.database_name = or_empty(record.database.as_deref());
    connection.database_user = or_empty(record.user.as_deref());
    connection.database_socket = or_empty(record.socket.as_deref());
    if let Some(port) = non_empty(record.port.as_deref()) {
        connection.database_port = port.to_string();
    }

    connection.server_address = or_empty(record.ssh_host.as_deref());
    connection.server_user = or_empty(record.ssh_user.as_deref());
    if let Some(port) = non_empty(record.ssh_port.as_deref()) {
        connection.server_port = port.to_string();
    }
    connection.is_over_ssh = i64::from(record.is_over_ssh());

    connection.group_id = group.unwrap_or_default().to_string();
    connection.status_color = status_color(record.color_index).to_string();

    connection
}

/// Maps a single flattened entry, or `None` if it is not a favorite.
#[must_use]
pub fn map_entry(entry: &FlattenedEntry) -> Option<TablePlusConnection> {
    entry
        .node
        .as_favorite()
        .map(|record| map_favorite(record, entry.group.as_deref(), Uuid::new_v4()))
}

/// Maps every flattened entry, assigning each connection a fresh ID.
///
/// Entries that are not favorites (stray arrays or scalars in the tree) are
/// skipped and reported.
#[must_use]
pub fn map_entries(entries: &[FlattenedEntry]) -> MappedConnections {
    let _span = info_span!(span_names::EXPORT_MAP, entries = entries.len()).entered();

    let mut mapped = MappedConnections::default();
    for entry in entries {
        if let Some(connection) = map_entry(entry) {
            mapped.connections.push(connection);
            continue;
        }

        let reason = match &entry.node {
            FavoriteNode::Sequence(_) => "Array in place of a favorite",
            FavoriteNode::Unsupported(_) => "Scalar in place of a favorite",
            FavoriteNode::Folder { .. } | FavoriteNode::Favorite(_) => "Not a favorite",
        };
        let identifier = entry.node.label();
        mapped.skipped.push(match entry.group.as_deref() {
            Some(group) => SkippedEntry::with_location(identifier, reason, group),
            None => SkippedEntry::new(identifier, reason),
        });
    }

    debug!(
        connections = mapped.connections.len(),
        skipped = mapped.skipped.len(),
        "Favorites mapped"
    );
    mapped
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn or_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}
