//! Migration pipeline: backup, load, flatten, group, map, write.
//!
//! A [`Migrator`] runs the stages once, in order. Nothing touches the
//! filesystem unless the options carry the user's confirmation.

use std::path::PathBuf;

use chrono::Utc;

use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::config::{InstallPaths, Settings, SourceApp, TargetApp};
use crate::error::Result;
use crate::export;
use crate::import::{self, ImportSource, SequelImporter, SkippedEntry};
use crate::logging::span_names;
use crate::models::{ConnectionGroup, TablePlusConnection};
use crate::storage;

/// Files a migration reads and writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationPaths {
    /// Source favorites file
    pub source: PathBuf,
    /// Destination connections file
    pub connections: PathBuf,
    /// Destination groups file
    pub groups: PathBuf,
}

impl MigrationPaths {
    /// Resolves the default install locations for a source and target
    #[must_use]
    pub fn resolve(install: &InstallPaths, from: SourceApp, to: TargetApp) -> Self {
        Self {
            source: install.source_favorites(from),
            connections: install.target_connections(to),
            groups: install.target_groups(to),
        }
    }
}

/// Options for one migration run
#[derive(Debug, Clone)]
pub struct MigrationOptions {
    /// Application to read favorites from
    pub import_from: SourceApp,
    /// TablePlus edition to write to
    pub import_to: TargetApp,
    /// Gate for every filesystem write; nothing happens unless true
    pub confirm_continue: bool,
    /// Copy existing destination files aside first
    pub backup: bool,
    /// Resolved file locations
    pub paths: MigrationPaths,
}

impl MigrationOptions {
    /// Creates options resolved against custom install paths
    #[must_use]
    pub fn with_install_paths(
        install: &InstallPaths,
        import_from: SourceApp,
        import_to: TargetApp,
        confirm_continue: bool,
    ) -> Self {
        Self {
            import_from,
            import_to,
            confirm_continue,
            backup: true,
            paths: MigrationPaths::resolve(install, import_from, import_to),
        }
    }

    /// Creates options from settings, applying any path overrides
    #[must_use]
    pub fn from_settings(
        settings: &Settings,
        install: &InstallPaths,
        confirm_continue: bool,
    ) -> Self {
        let mut options = Self::with_install_paths(
            install,
            settings.import_from,
            settings.import_to,
            confirm_continue,
        );
        options.backup = settings.backup;
        if let Some(ref source) = settings.source_path {
            options.paths.source.clone_from(source);
        }
        if let Some(ref connections) = settings.connections_path {
            options.paths.connections.clone_from(connections);
        }
        if let Some(ref groups) = settings.groups_path {
            options.paths.groups.clone_from(groups);
        }
        options
    }
}

/// Records produced from the source, before anything is written
#[derive(Debug, Default, Serialize)]
pub struct MigrationPreview {
    /// TablePlus connections in source order
    pub connections: Vec<TablePlusConnection>,
    /// TablePlus groups in first-appearance order
    pub groups: Vec<ConnectionGroup>,
    /// Source nodes that produced nothing
    pub skipped: Vec<SkippedEntry>,
}

/// Outcome of a migration run
#[derive(Debug, Default, Serialize)]
pub struct MigrationReport {
    /// False when the run stopped at the confirmation gate
    pub performed: bool,
    /// Number of connections written
    pub connections: usize,
    /// Number of groups written
    pub groups: usize,
    /// Source nodes that produced nothing
    pub skipped: Vec<SkippedEntry>,
    /// Backups made before writing
    pub backups: Vec<PathBuf>,
    /// Destination files written
    pub written: Vec<PathBuf>,
}

impl MigrationReport {
    /// Returns a summary string of the run
    #[must_use]
    pub fn summary(&self) -> String {
        if !self.performed {
            return "Not confirmed, nothing written".to_string();
        }
        format!(
            "Connections: {}, Groups: {}, Skipped: {}, Backups: {}",
            self.connections,
            self.groups,
            self.skipped.len(),
            self.backups.len()
        )
    }
}

/// Runs the favorites migration
#[derive(Debug, Clone)]
pub struct Migrator {
    options: MigrationOptions,
}

impl Migrator {
    /// Creates a migrator for the given options
    #[must_use]
    pub const fn new(options: MigrationOptions) -> Self {
        Self { options }
    }

    /// Reads the source and builds the destination records without
    /// writing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the source favorites tree is malformed.
    pub fn preview(&self) -> Result<MigrationPreview> {
        let importer = SequelImporter::with_paths(
            self.options.import_from,
            vec![self.options.paths.source.clone()],
        );
        let imported = importer.import()?;

        let groups = import::extract_groups(&imported.entries);
        let mapped = export::map_entries(&imported.entries);

        let mut skipped = imported.skipped;
        skipped.extend(mapped.skipped);

        Ok(MigrationPreview {
            connections: mapped.connections,
            groups,
            skipped,
        })
    }

    /// Runs the migration.
    ///
    /// Without confirmation this returns an unperformed report and touches
    /// nothing. Otherwise existing destination files are backed up (unless
    /// disabled), the records are built, and both destination files are
    /// replaced, connections first.
    ///
    /// # Errors
    ///
    /// Returns an error if the source favorites tree is malformed or a
    /// destination file cannot be written.
    pub fn run(&self) -> Result<MigrationReport> {
        self.run_at(Utc::now().timestamp_millis())
    }

    /// Runs the migration, naming backups with `backup_timestamp` (unix millis)
    fn run_at(&self, backup_timestamp: i64) -> Result<MigrationReport> {
        let _span = info_span!(
            span_names::MIGRATE_RUN,
            from = %self.options.import_from,
            to = %self.options.import_to
        )
        .entered();
        debug!(options = ?self.options, "Migration requested");

        if !self.options.confirm_continue {
            info!("Migration not confirmed, leaving files untouched");
            return Ok(MigrationReport::default());
        }

        let paths = &self.options.paths;
        let backups = if self.options.backup {
            storage::backup_existing(
                &[paths.connections.as_path(), paths.groups.as_path()],
                backup_timestamp,
            )
        } else {
            Vec::new()
        };

        let preview = self.preview()?;
        let written = storage::write_outputs(
            &paths.connections,
            &preview.connections,
            &paths.groups,
            &preview.groups,
        )?;

        let report = MigrationReport {
            performed: true,
            connections: preview.connections.len(),
            groups: preview.groups.len(),
            skipped: preview.skipped,
            backups,
            written,
        };
        info!(summary = %report.summary(), "Migration complete");
        Ok(report)
    }
}
