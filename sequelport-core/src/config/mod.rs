//! Configuration management for `SequelPort`
//!
//! This module handles the settings file and resolves where the source and
//! destination applications keep their property lists.

mod manager;
mod paths;
mod settings;

pub use manager::ConfigManager;
pub use paths::{InstallPaths, SourceApp, TargetApp, CONNECTIONS_FILE, GROUPS_FILE};
pub use settings::{expand_tilde, Settings};
