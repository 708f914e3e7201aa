//! Integration tests for whole migration runs
//!
//! Each test lays out a fake home directory, writes a favorites file where
//! Sequel Pro or Sequel Ace keeps it, and runs the migrator against it.

use std::fs;
use std::path::Path;

use plist::Value;
use sequelport_core::config::{InstallPaths, SourceApp, TargetApp};
use sequelport_core::error::{ExportError, ImportError, SequelPortError};
use sequelport_core::migrate::{MigrationOptions, Migrator};
use sequelport_core::models::{ConnectionGroup, TablePlusConnection};
use tempfile::TempDir;

use crate::fixtures::{favorite, favorites_document, folder, install_favorites, named_favorite, text};

fn options_for(home: &Path, from: SourceApp, to: TargetApp) -> MigrationOptions {
    let install = InstallPaths::with_home(home.to_path_buf());
    MigrationOptions::with_install_paths(&install, from, to, true)
}

fn read_connections(path: &Path) -> Vec<TablePlusConnection> {
    plist::from_file(path).expect("connections plist")
}

fn read_groups(path: &Path) -> Vec<ConnectionGroup> {
    plist::from_file(path).expect("groups plist")
}

fn backups_in(dir: &Path, file_name: &str) -> Vec<String> {
    let prefix = format!("{file_name}.backup-");
    fs::read_dir(dir)
        .expect("destination dir")
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(&prefix))
        .collect()
}

// ============================================================================
// Field mapping through a full run
// ============================================================================

#[test]
fn test_single_favorite_at_root() {
    let home = TempDir::new().unwrap();
    install_favorites(
        home.path(),
        SourceApp::SequelPro,
        &favorites_document(vec![favorite(&[
            ("name", text("db1")),
            ("host", text("h")),
            ("port", text("5432")),
        ])]),
    );
    let options = options_for(home.path(), SourceApp::SequelPro, TargetApp::Standalone);

    let report = Migrator::new(options.clone()).run().unwrap();
    assert!(report.performed);
    assert_eq!(report.connections, 1);
    assert_eq!(report.groups, 0);
    assert!(report.backups.is_empty());

    let connections = read_connections(&options.paths.connections);
    assert_eq!(connections.len(), 1);
    let conn = &connections[0];
    assert_eq!(conn.connection_name, "db1");
    assert_eq!(conn.database_host, "h");
    assert_eq!(conn.database_port, "5432");
    assert_eq!(conn.group_id, "");
    assert_eq!(conn.driver, "MySQL");
    assert_eq!(conn.is_over_ssh, 0);
    assert_eq!(conn.server_port, "22");

    let groups = Value::from_file(&options.paths.groups).unwrap();
    assert_eq!(groups, Value::Array(Vec::new()));
}

#[test]
fn test_nested_folders_collapse_to_nearest() {
    let home = TempDir::new().unwrap();
    install_favorites(
        home.path(),
        SourceApp::SequelAce,
        &favorites_document(vec![folder(
            "A",
            vec![folder(
                "B",
                vec![favorite(&[
                    ("name", text("leaf")),
                    ("sshHost", text("x")),
                    ("colorIndex", Value::Integer(1_i64.into())),
                ])],
            )],
        )]),
    );
    let options = options_for(home.path(), SourceApp::SequelAce, TargetApp::Setapp);

    Migrator::new(options.clone()).run().unwrap();

    let connections = read_connections(&options.paths.connections);
    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].group_id, "B");
    assert_eq!(connections[0].is_over_ssh, 1);
    assert_eq!(connections[0].server_address, "x");
    assert_eq!(connections[0].status_color, "#FFD78A");

    let groups = read_groups(&options.paths.groups);
    assert_eq!(groups, vec![ConnectionGroup::from_folder_name("B")]);
    assert!(options
        .paths
        .connections
        .to_string_lossy()
        .contains("com.tinyapp.TablePlus-setapp"));
}

#[test]
fn test_connection_plist_keys() {
    let home = TempDir::new().unwrap();
    install_favorites(
        home.path(),
        SourceApp::SequelPro,
        &favorites_document(vec![named_favorite("only")]),
    );
    let options = options_for(home.path(), SourceApp::SequelPro, TargetApp::Standalone);
    Migrator::new(options.clone()).run().unwrap();

    let value = Value::from_file(&options.paths.connections).unwrap();
    let dict = value.as_array().unwrap()[0].as_dictionary().unwrap();
    for key in [
        "ConnectionName",
        "DatabasePort",
        "Enviroment",
        "GroupID",
        "ID",
        "isOverSSH",
        "statusColor",
        "tLSMode",
    ] {
        assert!(dict.contains_key(key), "missing key {key}");
    }
    assert_eq!(dict.get("DatabasePort").and_then(Value::as_string), Some("3306"));
    assert_eq!(dict.get("Enviroment").and_then(Value::as_string), Some(""));
}

#[test]
fn test_malformed_nodes_are_reported_not_written() {
    let home = TempDir::new().unwrap();
    install_favorites(
        home.path(),
        SourceApp::SequelPro,
        &favorites_document(vec![
            named_favorite("kept"),
            Value::Array(vec![text("stray")]),
            folder("Empty", Vec::new()),
        ]),
    );
    let options = options_for(home.path(), SourceApp::SequelPro, TargetApp::Standalone);

    let report = Migrator::new(options.clone()).run().unwrap();
    assert_eq!(report.connections, 1);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(report.groups, 0);

    let connections = read_connections(&options.paths.connections);
    assert_eq!(connections[0].connection_name, "kept");
}

// ============================================================================
// Filesystem behavior
// ============================================================================

#[test]
fn test_existing_destinations_are_backed_up_and_replaced() {
    let home = TempDir::new().unwrap();
    install_favorites(
        home.path(),
        SourceApp::SequelPro,
        &favorites_document(vec![folder("Team", vec![named_favorite("fresh")])]),
    );
    let options = options_for(home.path(), SourceApp::SequelPro, TargetApp::Standalone);
    let dir = options.paths.connections.parent().unwrap().to_path_buf();
    fs::create_dir_all(&dir).unwrap();
    fs::write(&options.paths.connections, "old connections").unwrap();
    fs::write(&options.paths.groups, "old groups").unwrap();

    let report = Migrator::new(options.clone()).run().unwrap();
    assert_eq!(report.backups.len(), 2);

    let connection_backups = backups_in(&dir, "Connections.plist");
    let group_backups = backups_in(&dir, "ConnectionGroups.plist");
    assert_eq!(connection_backups.len(), 1);
    assert_eq!(group_backups.len(), 1);
    assert_eq!(
        fs::read_to_string(dir.join(&connection_backups[0])).unwrap(),
        "old connections"
    );
    assert_eq!(
        fs::read_to_string(dir.join(&group_backups[0])).unwrap(),
        "old groups"
    );

    let connections = read_connections(&options.paths.connections);
    assert_eq!(connections[0].connection_name, "fresh");
    assert_eq!(connections[0].group_id, "Team");
}

#[test]
fn test_no_backup_option_skips_copies() {
    let home = TempDir::new().unwrap();
    install_favorites(
        home.path(),
        SourceApp::SequelPro,
        &favorites_document(vec![named_favorite("db")]),
    );
    let mut options = options_for(home.path(), SourceApp::SequelPro, TargetApp::Standalone);
    options.backup = false;
    let dir = options.paths.connections.parent().unwrap().to_path_buf();
    fs::create_dir_all(&dir).unwrap();
    fs::write(&options.paths.connections, "old").unwrap();

    let report = Migrator::new(options).run().unwrap();
    assert!(report.backups.is_empty());
    assert!(backups_in(&dir, "Connections.plist").is_empty());
}

#[test]
fn test_unconfirmed_run_leaves_files_alone() {
    let home = TempDir::new().unwrap();
    install_favorites(
        home.path(),
        SourceApp::SequelPro,
        &favorites_document(vec![named_favorite("db")]),
    );
    let mut options = options_for(home.path(), SourceApp::SequelPro, TargetApp::Standalone);
    options.confirm_continue = false;
    let dir = options.paths.connections.parent().unwrap().to_path_buf();
    fs::create_dir_all(&dir).unwrap();
    fs::write(&options.paths.connections, "untouched").unwrap();

    let report = Migrator::new(options.clone()).run().unwrap();
    assert!(!report.performed);
    assert_eq!(
        fs::read_to_string(&options.paths.connections).unwrap(),
        "untouched"
    );
    assert!(!options.paths.groups.exists());
    assert!(backups_in(&dir, "Connections.plist").is_empty());
}

#[test]
fn test_repeated_runs_differ_only_in_ids() {
    let home = TempDir::new().unwrap();
    install_favorites(
        home.path(),
        SourceApp::SequelPro,
        &favorites_document(vec![
            named_favorite("root"),
            folder("G", vec![named_favorite("a"), named_favorite("b")]),
        ]),
    );
    let mut options = options_for(home.path(), SourceApp::SequelPro, TargetApp::Standalone);
    options.backup = false;
    let migrator = Migrator::new(options.clone());

    migrator.run().unwrap();
    let first = read_connections(&options.paths.connections);
    let first_groups = read_groups(&options.paths.groups);

    migrator.run().unwrap();
    let second = read_connections(&options.paths.connections);
    let second_groups = read_groups(&options.paths.groups);

    assert_eq!(first_groups, second_groups);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_ne!(a.id, b.id);
        let mut a = a.clone();
        a.id.clone_from(&b.id);
        assert_eq!(&a, b);
    }
}

#[test]
fn test_failed_groups_write_keeps_new_connections() {
    let home = TempDir::new().unwrap();
    install_favorites(
        home.path(),
        SourceApp::SequelPro,
        &favorites_document(vec![folder("Team", vec![named_favorite("fresh")])]),
    );
    let mut options = options_for(home.path(), SourceApp::SequelPro, TargetApp::Standalone);
    options.backup = false;
    let dir = options.paths.connections.parent().unwrap().to_path_buf();
    fs::create_dir_all(&dir).unwrap();
    fs::write(&options.paths.connections, "old connections").unwrap();
    // A directory where the groups file belongs makes that write fail.
    fs::create_dir(&options.paths.groups).unwrap();

    let err = Migrator::new(options.clone()).run().unwrap_err();
    match err {
        SequelPortError::Export(ref export @ ExportError::Write { .. }) => {
            assert_eq!(export.path(), options.paths.groups.as_path());
        }
        other => panic!("expected a write error, got {other:?}"),
    }

    let connections = read_connections(&options.paths.connections);
    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].connection_name, "fresh");
    assert_eq!(connections[0].group_id, "Team");
}

// ============================================================================
// Source errors
// ============================================================================

#[test]
fn test_missing_source_fails_with_missing_key() {
    let home = TempDir::new().unwrap();
    let options = options_for(home.path(), SourceApp::SequelAce, TargetApp::Standalone);

    let err = Migrator::new(options.clone()).run().unwrap_err();
    assert!(matches!(
        err,
        SequelPortError::Import(ImportError::MissingKey { ref key, .. }) if key == "Favorites Root"
    ));
    assert!(!options.paths.connections.exists());
    assert!(!options.paths.groups.exists());
}

#[test]
fn test_unparseable_source_is_a_parse_error() {
    let home = TempDir::new().unwrap();
    let options = options_for(home.path(), SourceApp::SequelPro, TargetApp::Standalone);
    fs::create_dir_all(options.paths.source.parent().unwrap()).unwrap();
    fs::write(&options.paths.source, "<plist><dict><key>broken").unwrap();

    let err = Migrator::new(options).run().unwrap_err();
    assert!(matches!(
        err,
        SequelPortError::Import(ImportError::ParseError { .. })
    ));
}

#[test]
fn test_preview_writes_nothing() {
    let home = TempDir::new().unwrap();
    install_favorites(
        home.path(),
        SourceApp::SequelPro,
        &favorites_document(vec![folder("Ops", vec![named_favorite("db")])]),
    );
    let options = options_for(home.path(), SourceApp::SequelPro, TargetApp::Standalone);

    let preview = Migrator::new(options.clone()).preview().unwrap();
    assert_eq!(preview.connections.len(), 1);
    assert_eq!(preview.groups, vec![ConnectionGroup::from_folder_name("Ops")]);
    assert!(!options.paths.connections.exists());
}
