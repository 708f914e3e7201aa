//! Favorites tree walking: flattening and group extraction.
//!
//! TablePlus supports a single level of groups, so nested folders collapse
//! onto the folder that directly contains each node.

use std::collections::HashSet;

use tracing::{debug, info_span};

use crate::logging::span_names;
use crate::models::{ConnectionGroup, FavoriteNode, FlattenedEntry};

/// Flattens a favorites tree into `(group, node)` entries.
///
/// Traversal is depth-first and pre-order. Every non-folder node is paired
/// with the name of its immediate folder; a nested folder's name replaces its
/// ancestor's. Folders without children contribute nothing.
#[must_use]
pub fn flatten(nodes: &[FavoriteNode]) -> Vec<FlattenedEntry> {
    let _span = info_span!(span_names::IMPORT_FLATTEN, root_nodes = nodes.len()).entered();

    let entries = flatten_into(nodes, None, Vec::new());
    debug!(entries = entries.len(), "Favorites tree flattened");
    entries
}

fn flatten_into(
    nodes: &[FavoriteNode],
    group: Option<&str>,
    mut acc: Vec<FlattenedEntry>,
) -> Vec<FlattenedEntry> {
    for node in nodes {
        acc = match node {
            FavoriteNode::Folder { children, .. } if children.is_empty() => acc,
            FavoriteNode::Folder { name, children } => {
                flatten_into(children, name.as_deref(), acc)
            }
            other => {
                acc.push(FlattenedEntry::new(group.map(str::to_owned), other.clone()));
                acc
            }
        };
    }
    acc
}

/// Returns the names of folders that have no children, in traversal order.
///
/// Unnamed empty folders are reported as `None`.
#[must_use]
pub fn empty_folders(nodes: &[FavoriteNode]) -> Vec<Option<String>> {
    nodes
        .iter()
        .flat_map(|node| match node {
            FavoriteNode::Folder { name, children } if children.is_empty() => {
                vec![name.clone()]
            }
            FavoriteNode::Folder { children, .. } => empty_folders(children),
            _ => Vec::new(),
        })
        .collect()
}

/// Builds one group per distinct folder name, in order of first appearance.
///
/// Entries without a group are ignored.
#[must_use]
pub fn extract_groups(entries: &[FlattenedEntry]) -> Vec<ConnectionGroup> {
    let _span = info_span!(span_names::IMPORT_GROUPS, entries = entries.len()).entered();

    let mut seen = HashSet::new();
    let groups: Vec<ConnectionGroup> = entries
        .iter()
        .filter_map(|entry| entry.group.as_deref())
        .filter(|name| seen.insert(*name))
        .map(ConnectionGroup::from_folder_name)
        .collect();

    debug!(groups = groups.len(), "Groups extracted");
    groups
}
