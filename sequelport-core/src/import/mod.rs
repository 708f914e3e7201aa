//! Import engine for reading saved favorites from other tools.
//!
//! Supported sources:
//! - Sequel Pro (`~/Library/Application Support/Sequel Pro`)
//! - Sequel Ace (sandboxed container)
//!
//! A source is read into a flat list of `(group, node)` entries; the folder
//! hierarchy is collapsed to the nearest enclosing folder.

mod sequel;
mod traits;
pub mod tree;

pub use sequel::{classify_node, SequelImporter};
pub use traits::{ImportResult, ImportSource, SkippedEntry};
pub use tree::{empty_folders, extract_groups, flatten};
