//! `SequelPort` Core Library
//!
//! This crate migrates saved favorites from Sequel Pro or Sequel Ace into
//! TablePlus. It reads the source `Favorites.plist` tree, collapses its folder
//! hierarchy into flat groups, maps every favorite onto TablePlus's connection
//! schema and writes `Connections.plist` and `ConnectionGroups.plist`.

pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod migrate;
pub mod models;
pub mod storage;

pub use config::{ConfigManager, InstallPaths, Settings, SourceApp, TargetApp};
pub use error::{
    ConfigError, ConfigResult, ExportError, ExportResult, ImportError, Result, SequelPortError,
};
pub use import::{ImportResult, ImportSource, SequelImporter, SkippedEntry};
pub use migrate::{MigrationOptions, MigrationPaths, MigrationPreview, MigrationReport, Migrator};
pub use models::{ConnectionGroup, FavoriteNode, FavoriteRecord, FlattenedEntry, TablePlusConnection};
