//! Best-effort backups of destination files.
//!
//! A backup never stops a migration: failures are logged and skipped.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span, warn};

use crate::logging::span_names;

/// Returns `<path>.backup-<timestamp_millis>`
#[must_use]
pub fn backup_path(path: &Path, timestamp_millis: i64) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".backup-{timestamp_millis}"));
    PathBuf::from(name)
}

/// Copies a file to its backup path if it exists.
///
/// Returns the backup path on success, `None` if there was nothing to copy
/// or the copy failed.
#[must_use]
pub fn backup_file(path: &Path, timestamp_millis: i64) -> Option<PathBuf> {
    if !path.is_file() {
        debug!(path = %path.display(), "Nothing to back up");
        return None;
    }

    let target = backup_path(path, timestamp_millis);
    match fs::copy(path, &target) {
        Ok(bytes) => {
            info!(from = %path.display(), to = %target.display(), bytes, "Backed up");
            Some(target)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Backup failed, continuing");
            None
        }
    }
}

/// Backs up every existing file in `paths` under one shared timestamp.
#[must_use]
pub fn backup_existing(paths: &[&Path], timestamp_millis: i64) -> Vec<PathBuf> {
    let _span = info_span!(span_names::STORAGE_BACKUP, files = paths.len()).entered();

    paths
        .iter()
        .filter_map(|path| backup_file(path, timestamp_millis))
        .collect()
}
