//! Property-list writer for TablePlus files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, info_span};

use crate::error::{ExportError, ExportResult};
use crate::logging::span_names;
use crate::models::{ConnectionGroup, TablePlusConnection};

/// Encodes `value` as an XML property list and replaces the file at `path`.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns `ExportError::Serialize` if encoding fails and
/// `ExportError::Write` if the file cannot be written.
pub fn write_plist<T>(path: &Path, value: &T) -> ExportResult<()>
where
    T: Serialize,
{
    let mut buffer = Vec::new();
    plist::to_writer_xml(&mut buffer, value).map_err(|e| ExportError::Serialize {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, buffer).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the connections file, then the groups file.
///
/// The writes run one after the other. If the second fails the first is
/// not rolled back. Returns the written paths once both are done.
///
/// # Errors
///
/// Returns the first write failure, naming the file it concerns.
pub fn write_outputs(
    connections_path: &Path,
    connections: &[TablePlusConnection],
    groups_path: &Path,
    groups: &[ConnectionGroup],
) -> ExportResult<Vec<PathBuf>> {
    let _span = info_span!(
        span_names::STORAGE_WRITE,
        connections = connections.len(),
        groups = groups.len()
    )
    .entered();

    write_plist(connections_path, &connections)?;
    info!(path = %connections_path.display(), "Connections written");

    write_plist(groups_path, &groups)?;
    info!(path = %groups_path.display(), "Groups written");

    Ok(vec![connections_path.to_path_buf(), groups_path.to_path_buf()])
}
