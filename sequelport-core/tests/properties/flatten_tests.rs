//! Property-based tests for favorites tree flattening
//!
//! Tests that arbitrary folder nesting collapses onto the nearest folder and
//! that the group list follows first appearance.

use std::collections::HashSet;

use proptest::prelude::*;
use sequelport_core::import::{classify_node, extract_groups, flatten};
use sequelport_core::models::{FavoriteNode, FavoriteRecord};

use crate::fixtures;

/// Shape of a generated favorites tree
#[derive(Debug, Clone)]
pub enum TreeSpec {
    Leaf(String),
    Folder(String, Vec<TreeSpec>),
}

impl TreeSpec {
    pub fn to_node(&self) -> FavoriteNode {
        match self {
            Self::Leaf(name) => FavoriteNode::Favorite(FavoriteRecord::named(name.clone())),
            Self::Folder(name, children) => {
                FavoriteNode::folder(name.clone(), children.iter().map(Self::to_node).collect())
            }
        }
    }

    pub fn to_value(&self) -> plist::Value {
        match self {
            Self::Leaf(name) => fixtures::named_favorite(name),
            Self::Folder(name, children) => {
                fixtures::folder(name, children.iter().map(Self::to_value).collect())
            }
        }
    }
}

/// Generates a tree of favorites and folders; folder names may be empty
pub fn arb_tree() -> impl Strategy<Value = TreeSpec> {
    let leaf = "[a-z][a-z0-9]{0,7}".prop_map(TreeSpec::Leaf);
    leaf.prop_recursive(4, 48, 5, |inner| {
        ("[A-Z]{0,3}", prop::collection::vec(inner, 0..5))
            .prop_map(|(name, children)| TreeSpec::Folder(name, children))
    })
}

/// Generates the root children of a favorites file
pub fn arb_forest() -> impl Strategy<Value = Vec<TreeSpec>> {
    prop::collection::vec(arb_tree(), 0..6)
}

/// Nearest-folder grouping computed directly from the generated shape
fn expected_entries(specs: &[TreeSpec], group: Option<&str>, out: &mut Vec<(Option<String>, String)>) {
    for spec in specs {
        match spec {
            TreeSpec::Leaf(name) => out.push((group.map(str::to_owned), name.clone())),
            TreeSpec::Folder(name, children) => {
                let inner = (!name.is_empty()).then_some(name.as_str());
                expected_entries(children, inner, out);
            }
        }
    }
}

pub fn expected(specs: &[TreeSpec]) -> Vec<(Option<String>, String)> {
    let mut out = Vec::new();
    expected_entries(specs, None, &mut out);
    out
}

pub fn nodes_of(specs: &[TreeSpec]) -> Vec<FavoriteNode> {
    specs.iter().map(TreeSpec::to_node).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Every favorite appears once, in pre-order, with its nearest folder
    #[test]
    fn flatten_groups_by_nearest_folder(specs in arb_forest()) {
        let entries = flatten(&nodes_of(&specs));

        let actual: Vec<(Option<String>, String)> = entries
            .iter()
            .map(|entry| {
                let name = entry
                    .node
                    .as_favorite()
                    .and_then(|record| record.name.clone())
                    .unwrap_or_default();
                (entry.group.clone(), name)
            })
            .collect();

        prop_assert_eq!(actual, expected(&specs));
    }

    /// Groups are distinct, ordered by first appearance, and cover every grouped entry
    #[test]
    fn groups_are_distinct_in_first_seen_order(specs in arb_forest()) {
        let entries = flatten(&nodes_of(&specs));
        let groups = extract_groups(&entries);

        let mut first_seen: Vec<String> = Vec::new();
        for group in entries.iter().filter_map(|e| e.group.as_ref()) {
            if !first_seen.contains(group) {
                first_seen.push(group.clone());
            }
        }

        let names: Vec<String> = groups.iter().map(|g| g.name.clone()).collect();
        prop_assert_eq!(&names, &first_seen);

        let unique: HashSet<&String> = names.iter().collect();
        prop_assert_eq!(unique.len(), names.len());

        for group in &groups {
            prop_assert_eq!(&group.id, &group.name);
            prop_assert_eq!(group.is_expanded, 0);
            prop_assert!(group.connections.is_empty());
        }
    }

    /// Classifying the stored plist form yields the same tree
    #[test]
    fn classify_matches_tree_shape(spec in arb_tree()) {
        prop_assert_eq!(classify_node(&spec.to_value()), spec.to_node());
    }
}
