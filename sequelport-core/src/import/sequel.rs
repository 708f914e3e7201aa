//! Sequel Pro / Sequel Ace favorites importer.
//!
//! Reads `Favorites.plist`, whose layout is
//! `{"Favorites Root": {"Children": [<node>...]}}` with folders nesting
//! further `Children` arrays.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use plist::{Dictionary, Value};
use tracing::{debug, info, info_span, warn};

use crate::config::{InstallPaths, SourceApp};
use crate::error::ImportError;
use crate::logging::span_names;
use crate::models::{FavoriteNode, FavoriteRecord};

use super::traits::{ImportResult, ImportSource, SkippedEntry};
use super::tree;

const ROOT_KEY: &str = "Favorites Root";
const CHILDREN_KEY: &str = "Children";
const NAME_KEY: &str = "Name";

/// Importer for the favorites file of Sequel Pro or Sequel Ace.
pub struct SequelImporter {
    app: SourceApp,
    /// Custom paths to read favorites from
    custom_paths: Vec<PathBuf>,
}

impl SequelImporter {
    /// Creates a new importer reading the application's default location
    #[must_use]
    pub const fn new(app: SourceApp) -> Self {
        Self {
            app,
            custom_paths: Vec::new(),
        }
    }

    /// Creates a new importer with custom paths
    #[must_use]
    pub const fn with_paths(app: SourceApp, paths: Vec<PathBuf>) -> Self {
        Self {
            app,
            custom_paths: paths,
        }
    }

    /// Loads a favorites file as a property list.
    ///
    /// A missing or unreadable file yields an empty array, as if the file
    /// held no favorites.
    ///
    /// # Errors
    ///
    /// Returns an error if the file was read but is not a property list.
    pub fn load_document(&self, path: &Path) -> Result<Value, ImportError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Favorites unreadable, using empty document");
                return Ok(Value::Array(Vec::new()));
            }
        };

        Value::from_reader(Cursor::new(bytes)).map_err(|e| ImportError::ParseError {
            source_name: self.app.display_name().to_string(),
            reason: format!("Failed to parse {}: {e}", path.display()),
        })
    }

    /// Extracts and classifies the nodes under `Favorites Root`.
    ///
    /// # Errors
    ///
    /// Returns an error if `Favorites Root` or its `Children` array is absent.
    pub fn root_nodes(&self, document: &Value) -> Result<Vec<FavoriteNode>, ImportError> {
        let root = document
            .as_dictionary()
            .and_then(|dict| dict.get(ROOT_KEY))
            .ok_or_else(|| self.missing_key(ROOT_KEY, "the top-level dictionary"))?;

        let children = root
            .as_dictionary()
            .and_then(|dict| dict.get(CHILDREN_KEY))
            .ok_or_else(|| self.missing_key(CHILDREN_KEY, ROOT_KEY))?
            .as_array()
            .ok_or_else(|| ImportError::InvalidEntry {
                source_name: self.app.display_name().to_string(),
                reason: format!("\"{ROOT_KEY}\" children is not an array"),
            })?;

        Ok(children.iter().map(classify_node).collect())
    }

    /// Parses an already loaded favorites document into flattened entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the document lacks the favorites root structure.
    pub fn parse_document(
        &self,
        document: &Value,
        source_path: &str,
    ) -> Result<ImportResult, ImportError> {
        let nodes = self.root_nodes(document)?;

        let mut result = ImportResult::new();
        for name in tree::empty_folders(&nodes) {
            result.add_skipped(SkippedEntry::with_location(
                name.unwrap_or_else(|| "<unnamed folder>".to_string()),
                "Folder has no children",
                source_path,
            ));
        }
        result.entries = tree::flatten(&nodes);

        Ok(result)
    }

    fn missing_key(&self, key: &str, context: &str) -> ImportError {
        ImportError::MissingKey {
            key: key.to_string(),
            context: format!("{} favorites ({context})", self.app.display_name()),
        }
    }
}

/// Classifies a plist value as a favorites tree node.
///
/// Dictionaries with a `Children` array are folders, every other dictionary
/// is a favorite. Arrays and scalars in node position are kept as malformed
/// markers so they can be reported instead of mapped.
///
/// Scalars (integers, booleans, dates...) never become favorites, not even
/// all-default ones; they are skipped and reported like stray arrays.
#[must_use]
pub fn classify_node(value: &Value) -> FavoriteNode {
    match value {
        Value::Dictionary(dict) => match dict.get(CHILDREN_KEY) {
            Some(Value::Array(children)) => FavoriteNode::Folder {
                name: dict
                    .get(NAME_KEY)
                    .and_then(Value::as_string)
                    .filter(|name| !name.is_empty())
                    .map(str::to_owned),
                children: children.iter().map(classify_node).collect(),
            },
            _ => FavoriteNode::Favorite(record_from_dictionary(dict)),
        },
        Value::Array(items) => FavoriteNode::Sequence(items.len()),
        other => FavoriteNode::Unsupported(value_kind(other)),
    }
}

fn record_from_dictionary(dict: &Dictionary) -> FavoriteRecord {
    let text = |key: &str| dict.get(key).and_then(value_to_text);

    FavoriteRecord {
        name: text("name"),
        host: text("host"),
        port: text("port"),
        database: text("database"),
        user: text("user"),
        socket: text("socket"),
        ssh_host: text("sshHost"),
        ssh_port: text("sshPort"),
        ssh_user: text("sshUser"),
        color_index: dict.get("colorIndex").and_then(value_to_index),
    }
}

/// Reads a string-ish field. Sequel Pro stores ports as strings or integers
/// depending on version.
fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => i
            .as_signed()
            .map(|n| n.to_string())
            .or_else(|| i.as_unsigned().map(|n| n.to_string())),
        Value::Real(r) => Some(r.to_string()),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn value_to_index(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => i.as_signed(),
        Value::Real(r) if r.fract() == 0.0 && r.is_finite() => Some(*r as i64),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "array",
        Value::Dictionary(_) => "dictionary",
        Value::Boolean(_) => "boolean",
        Value::Data(_) => "data",
        Value::Date(_) => "date",
        Value::Real(_) => "real",
        Value::Integer(_) => "integer",
        Value::String(_) => "string",
        _ => "unknown",
    }
}

impl ImportSource for SequelImporter {
    fn source_id(&self) -> &'static str {
        match self.app {
            SourceApp::SequelPro => "sequel_pro",
            SourceApp::SequelAce => "sequel_ace",
        }
    }

    fn display_name(&self) -> &'static str {
        self.app.display_name()
    }

    fn default_paths(&self) -> Vec<PathBuf> {
        if !self.custom_paths.is_empty() {
            return self.custom_paths.clone();
        }

        match InstallPaths::from_home_dir() {
            Ok(paths) => vec![paths.source_favorites(self.app)],
            Err(e) => {
                warn!(error = %e, "Cannot resolve home directory");
                Vec::new()
            }
        }
    }

    fn import_from_path(&self, path: &Path) -> Result<ImportResult, ImportError> {
        let _span = info_span!(
            span_names::IMPORT_LOAD,
            source = self.source_id(),
            path = %path.display()
        )
        .entered();

        let document = self.load_document(path)?;
        let result = self.parse_document(&document, &path.display().to_string())?;

        info!(summary = %result.summary(), "Favorites loaded");
        Ok(result)
    }
}
